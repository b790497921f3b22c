//! Mask generation function MGF1 ([RFC8017 § B.2.1]) over SHA-1.
//!
//! [RFC8017 § B.2.1]: https://datatracker.ietf.org/doc/html/rfc8017#appendix-B.2.1

use crate::{Error, Result, H_LEN};
use alloc::vec::Vec;
use sha1::{Digest, Sha1};

/// MGF1 stops at 2^32 digest blocks since the counter is four octets.
const MAX_MASK_LEN: u64 = (u32::MAX as u64 + 1) * H_LEN as u64;

/// Fails with [`Error::InvalidLength`] when MGF1 cannot produce `mask_len`
/// bytes.
pub(crate) fn check_mask_len(mask_len: usize) -> Result<()> {
    if mask_len as u64 > MAX_MASK_LEN {
        return Err(Error::InvalidLength);
    }

    Ok(())
}

/// Expand `seed` into a mask of exactly `mask_len` bytes.
///
/// The mask is `Hash(seed || C)` for `C = 0, 1, 2, ...` encoded as a 4-byte
/// big-endian counter, concatenated and truncated to `mask_len`. The output
/// only depends on its inputs, and a shorter mask is always a prefix of a
/// longer one for the same seed.
pub fn mgf1(seed: &[u8], mask_len: usize) -> Result<Vec<u8>> {
    check_mask_len(mask_len)?;

    let blocks = mask_len.div_ceil(H_LEN);
    let mut mask = Vec::with_capacity(blocks * H_LEN);

    for counter in 0..blocks {
        let counter = u32::try_from(counter).map_err(|_| Error::InvalidLength)?;
        let block = Sha1::new()
            .chain_update(seed)
            .chain_update(counter.to_be_bytes())
            .finalize();

        mask.extend_from_slice(&block);
    }

    mask.truncate(mask_len);
    Ok(mask)
}

/// XOR the first `len` bytes of `a` and `b`.
///
/// # Panics
///
/// If either input is shorter than `len`.
pub fn xor(a: &[u8], b: &[u8], len: usize) -> Vec<u8> {
    a[..len].iter().zip(&b[..len]).map(|(x, y)| x ^ y).collect()
}
