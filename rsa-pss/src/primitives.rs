//!
//! Octet string conversion and the raw RSA signature primitives
//! ([RFC8017 § 4] and [§ 5.2])
//!
//! [RFC8017 § 4]: https://datatracker.ietf.org/doc/html/rfc8017#section-4
//! [§ 5.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-5.2
//!

use alloc::{vec, vec::Vec};
use num_bigint::BigUint;

/// Byte length of `n`, i.e. `ceil(bitlen(n) / 8)`.
pub(crate) fn byte_len(n: &BigUint) -> usize {
    n.bits().div_ceil(8) as usize
}

/// OS2IP: interpret `bytes` as a big-endian unsigned integer.
pub(crate) fn os2ip(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// I2OSP: encode `x` big-endian, left-padded with zeros to exactly `len`
/// bytes.
///
/// Returns `None` when `x` does not fit in `len` bytes.
pub(crate) fn i2osp(x: &BigUint, len: usize) -> Option<Vec<u8>> {
    let bytes = x.to_bytes_be();
    // `to_bytes_be` encodes zero as a single zero octet
    let significant = bytes
        .iter()
        .position(|&b| b != 0)
        .map_or(&[][..], |start| &bytes[start..]);

    if significant.len() > len {
        return None;
    }

    let mut out = vec![0u8; len];
    out[len - significant.len()..].copy_from_slice(significant);
    Some(out)
}

/// RSASP1: `s = m^d mod n`.
pub(crate) fn rsasp1(m: &BigUint, d: &BigUint, n: &BigUint) -> BigUint {
    m.modpow(d, n)
}

/// RSAVP1: `m = s^e mod n`.
pub(crate) fn rsavp1(s: &BigUint, e: &BigUint, n: &BigUint) -> BigUint {
    s.modpow(e, n)
}
