//!
//! Module containing the definition of the public key container
//!

use crate::{
    encoding, primitives, signing_key::default_em_bits, Error, Result, Signature, H_LEN,
};
use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha1::{Digest, Sha1};
use signature::Verifier;

/// RSASSA-PSS public key `(e, n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct VerifyingKey {
    /// Modulus n
    n: BigUint,

    /// Public exponent e
    e: BigUint,

    /// Encoded message length in bits used by the signature traits
    em_bits: usize,
}

impl VerifyingKey {
    /// Construct a public key from the public exponent `e` and modulus `n`.
    ///
    /// The values are only checked to be usable for exponentiation
    /// (`n > 1`, `e != 0`).
    pub fn from_components(e: BigUint, n: BigUint) -> Result<Self> {
        if n <= BigUint::one() || e.is_zero() {
            return Err(Error::InvalidKey);
        }

        let em_bits = default_em_bits(&n);
        Ok(Self { n, e, em_bits })
    }

    /// Use `em_bits` for signatures checked through the [`signature`] traits.
    pub fn with_em_bits(mut self, em_bits: usize) -> Self {
        self.em_bits = em_bits;
        self
    }

    /// RSA modulus n
    #[must_use]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// RSA public exponent e
    #[must_use]
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Encoded message length in bits used by the [`signature`] traits.
    #[must_use]
    pub fn em_bits(&self) -> usize {
        self.em_bits
    }

    /// Byte length of the modulus, which is also the signature length.
    #[must_use]
    pub fn size(&self) -> usize {
        primitives::byte_len(&self.n)
    }

    /// Verify `signature` over `msg` for an `em_bits`-bit encoded message.
    ///
    /// Fails with [`Error::InvalidParameters`] before touching the signature
    /// when `em_bits` cannot hold the encoding. Any problem with the
    /// signature itself is reported as [`Error::Verification`].
    pub fn verify_with_em_bits(
        &self,
        msg: &[u8],
        signature: &Signature,
        em_bits: usize,
    ) -> Result<()> {
        let em_len =
            encoding::check_em_bits(em_bits).inspect_err(|err| warn!("rsa-pss: {err}"))?;

        debug!(
            "rsa-pss: verifying {} byte message, em_bits={em_bits}, modulus={} bytes",
            msg.len(),
            self.size()
        );

        // An encoding wider than the modulus cannot come from a signature
        if em_len > self.size() || signature.len() != self.size() {
            return Err(Error::Verification);
        }

        let s = primitives::os2ip(signature.as_ref());
        if s >= self.n {
            return Err(Error::Verification);
        }

        let m = primitives::rsavp1(&s, &self.e, &self.n);

        // A representative wider than the encoding is malformed, never truncated
        let em = primitives::i2osp(&m, em_len).ok_or(Error::Verification)?;

        let m_hash: [u8; H_LEN] = Sha1::digest(msg).into();
        encoding::emsa_pss_verify(&m_hash, &em, em_bits)
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        self.verify_with_em_bits(msg, signature, self.em_bits)
            .map_err(Into::into)
    }
}

/// Verify the hex-encoded `signature` over `message` with `public_key` for an
/// `em_bits`-bit encoded message.
///
/// Returns `Ok(false)` for every signature that does not verify, including
/// ones that are not valid hex or not as wide as the modulus. The only error
/// is [`Error::InvalidParameters`], for an `em_bits` too small to hold the
/// encoding.
pub fn verify(
    public_key: &VerifyingKey,
    signature: &str,
    message: &[u8],
    em_bits: usize,
) -> Result<bool> {
    encoding::check_em_bits(em_bits).inspect_err(|err| warn!("rsa-pss: {err}"))?;

    let Ok(signature) = signature.parse::<Signature>() else {
        return Ok(false);
    };

    match public_key.verify_with_em_bits(message, &signature, em_bits) {
        Ok(()) => Ok(true),
        Err(Error::Verification) => Ok(false),
        Err(err) => Err(err),
    }
}
