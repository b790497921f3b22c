//!
//! Fixed RSASSA-PSS parameters (SHA-1 digest, salt as long as the digest)
//!

/// Length in bytes of a SHA-1 digest (`hLen`).
pub const H_LEN: usize = 20;

/// Length in bytes of the per-signature salt (`sLen`).
pub const S_LEN: usize = H_LEN;

/// Final octet of every encoded message.
pub const TRAILER: u8 = 0xBC;

/// Smallest encoded message length (`emLen`) able to hold the digest, the
/// salt, the `0x01` separator and the trailer.
pub const MIN_EM_LEN: usize = H_LEN + S_LEN + 2;

/// Eight zero octets prepended to `mHash || salt` before hashing.
pub(crate) const PADDING1: [u8; 8] = [0; 8];

/// Separator between the zero padding and the salt in the data block.
pub(crate) const SALT_SEPARATOR: u8 = 0x01;
