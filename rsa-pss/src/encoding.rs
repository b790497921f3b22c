//! EMSA-PSS encoding and verification ([RFC8017 § 9.1]) with SHA-1 and a
//! salt as long as the digest.
//!
//! ```text
//! EM = maskedDB || H || 0xbc
//! DB = PS || 0x01 || salt          (PS: zero octets)
//! H  = Hash(0x00 * 8 || mHash || salt)
//! maskedDB = DB ^ MGF1(H, emLen - hLen - 1)
//! ```
//!
//! [RFC8017 § 9.1]: https://datatracker.ietf.org/doc/html/rfc8017#section-9.1

use crate::{
    consts::{PADDING1, SALT_SEPARATOR},
    mgf, Error, Result, H_LEN, MIN_EM_LEN, S_LEN, TRAILER,
};
use alloc::{vec, vec::Vec};
use rand_core::CryptoRngCore;
use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Encoded message length in bytes for an encoded message of `em_bits` bits.
pub(crate) fn em_len(em_bits: usize) -> usize {
    em_bits.div_ceil(8)
}

/// Length check for the verification path, done before any exponentiation.
pub(crate) fn check_em_bits(em_bits: usize) -> Result<usize> {
    let em_len = em_len(em_bits);

    if em_len < MIN_EM_LEN {
        return Err(Error::InvalidParameters {
            em_len,
            min: MIN_EM_LEN,
        });
    }

    Ok(em_len)
}

/// Bits of the leading octet allowed to be set in an `em_bits`-bit encoding.
fn leading_octet_mask(em_len: usize, em_bits: usize) -> u8 {
    0xFF >> (8 * em_len - em_bits)
}

/// `H = Hash(0x00 * 8 || mHash || salt)`
fn salted_hash(m_hash: &[u8; H_LEN], salt: &[u8]) -> [u8; H_LEN] {
    Sha1::new()
        .chain_update(PADDING1)
        .chain_update(m_hash)
        .chain_update(salt)
        .finalize()
        .into()
}

/// Hash `message` with a fresh salt drawn from `rng` and encode it.
pub(crate) fn pss_encode(
    rng: &mut impl CryptoRngCore,
    message: &[u8],
    em_bits: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let m_hash: [u8; H_LEN] = Sha1::digest(message).into();

    let mut salt = Zeroizing::new([0u8; S_LEN]);
    rng.fill_bytes(&mut *salt);

    emsa_pss_encode(&m_hash, em_bits, &salt).map(Zeroizing::new)
}

/// Build the `em_bits`-bit encoded message for the digest `m_hash` and `salt`.
///
/// Fails with [`Error::EncodingTooShort`] when `ceil(em_bits / 8)` is below
/// [`MIN_EM_LEN`], and with [`Error::InvalidLength`] when the mask for DB is
/// longer than MGF1 can produce.
pub fn emsa_pss_encode(
    m_hash: &[u8; H_LEN],
    em_bits: usize,
    salt: &[u8; S_LEN],
) -> Result<Vec<u8>> {
    let em_len = em_len(em_bits);

    if em_len < MIN_EM_LEN {
        return Err(Error::EncodingTooShort {
            em_len,
            min: MIN_EM_LEN,
        });
    }

    let db_len = em_len - H_LEN - 1;
    mgf::check_mask_len(db_len)?;

    let h = salted_hash(m_hash, salt);
    let ps_len = db_len - S_LEN - 1;

    let mut db = Zeroizing::new(vec![0u8; db_len]);
    db[ps_len] = SALT_SEPARATOR;
    db[ps_len + 1..].copy_from_slice(salt);

    let db_mask = mgf::mgf1(&h, db_len)?;

    let mut em = Vec::with_capacity(em_len);
    em.extend(mgf::xor(&db, &db_mask, db_len));
    em[0] &= leading_octet_mask(em_len, em_bits);
    em.extend_from_slice(&h);
    em.push(TRAILER);

    Ok(em)
}

/// Check that `em` is a valid `em_bits`-bit encoding of the digest `m_hash`.
///
/// Fails with [`Error::InvalidParameters`] when `ceil(em_bits / 8)` is below
/// [`MIN_EM_LEN`]. Every other failure is reported as
/// [`Error::Verification`].
pub fn emsa_pss_verify(m_hash: &[u8; H_LEN], em: &[u8], em_bits: usize) -> Result<()> {
    let em_len = check_em_bits(em_bits)?;

    if em.len() != em_len {
        return Err(Error::Verification);
    }

    let (masked_db, rest) = em.split_at(em_len - H_LEN - 1);
    let (h, trailer) = rest.split_at(H_LEN);

    if trailer != [TRAILER] {
        return Err(Error::Verification);
    }

    let leading_mask = leading_octet_mask(em_len, em_bits);
    if masked_db[0] & !leading_mask != 0 {
        return Err(Error::Verification);
    }

    let db_mask = mgf::mgf1(h, masked_db.len())?;
    let mut db = Zeroizing::new(mgf::xor(masked_db, &db_mask, masked_db.len()));
    db[0] &= leading_mask;

    let (ps, rest) = db.split_at(db.len() - S_LEN - 1);
    let (separator, salt) = rest.split_at(1);

    if ps.iter().any(|&b| b != 0) || separator != [SALT_SEPARATOR] {
        return Err(Error::Verification);
    }

    let h_prime = salted_hash(m_hash, salt);

    if h_prime[..].ct_eq(h).into() {
        Ok(())
    } else {
        Err(Error::Verification)
    }
}
