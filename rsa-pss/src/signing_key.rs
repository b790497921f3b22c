//!
//! Module containing the definition of the private key container
//!

use crate::{encoding, primitives, Error, Result, Signature};
use core::fmt;
use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use signature::RandomizedSigner;
use zeroize::{Zeroize, Zeroizing};

#[cfg(feature = "getrandom")]
use {alloc::string::String, rand_core::OsRng, signature::Signer};

/// RSASSA-PSS private key `(d, n)`.
///
/// Signatures are made over an encoded message of [`em_bits`](Self::em_bits)
/// bits, which defaults to `bitlen(n) - 1` so the encoded message always fits
/// below the modulus.
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct SigningKey {
    /// Modulus n
    n: BigUint,

    /// Private exponent d
    d: Zeroizing<PrivateExponent>,

    /// Encoded message length in bits used by the signature traits
    em_bits: usize,
}

impl SigningKey {
    /// Construct a private key from the private exponent `d` and modulus `n`.
    ///
    /// The values are only checked to be usable for exponentiation
    /// (`n > 1`, `d != 0`), not for being a consistent RSA key.
    pub fn from_components(d: BigUint, n: BigUint) -> Result<Self> {
        if n <= BigUint::one() || d.is_zero() {
            return Err(Error::InvalidKey);
        }

        let em_bits = default_em_bits(&n);
        Ok(Self {
            n,
            d: Zeroizing::new(PrivateExponent(d)),
            em_bits,
        })
    }

    /// Use `em_bits` for signatures made through the [`signature`] traits.
    pub fn with_em_bits(mut self, em_bits: usize) -> Self {
        self.em_bits = em_bits;
        self
    }

    /// RSA modulus n
    #[must_use]
    pub fn n(&self) -> &BigUint {
        &self.n
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

    /// Sign `msg` over an `em_bits`-bit encoded message, drawing the salt
    /// from `rng`.
    ///
    /// Fails with [`Error::EncodingTooShort`] when `em_bits` cannot hold the
    /// encoding, and with [`Error::ModulusTooSmall`] when `em_bits` is wider
    /// than the modulus or the encoded message is not below it.
    pub fn sign_with_em_bits(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
        em_bits: usize,
    ) -> Result<Signature> {
        debug!(
            "rsa-pss: signing {} byte message, em_bits={em_bits}, modulus={} bytes",
            msg.len(),
            self.size()
        );

        if em_bits as u64 > self.n.bits() {
            warn!(
                "rsa-pss: em_bits={em_bits} is wider than a {} bit modulus",
                self.n.bits()
            );
            return Err(Error::ModulusTooSmall);
        }

        let em = encoding::pss_encode(rng, msg, em_bits)
            .inspect_err(|err| warn!("rsa-pss: {err}"))?;

        let m = primitives::os2ip(&em);
        if m >= self.n {
            warn!(
                "rsa-pss: em_bits={em_bits} does not fit below a {} bit modulus",
                self.n.bits()
            );
            return Err(Error::ModulusTooSmall);
        }

        let s = primitives::rsasp1(&m, &self.d.0, &self.n);
        let bytes = primitives::i2osp(&s, self.size()).ok_or(Error::ModulusTooSmall)?;

        Ok(Signature::from(bytes))
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("n", &self.n)
            .field("em_bits", &self.em_bits)
            .finish_non_exhaustive()
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        self.sign_with_em_bits(rng, msg, self.em_bits)
            .map_err(Into::into)
    }
}

#[cfg(feature = "getrandom")]
impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        self.try_sign_with_rng(&mut OsRng, msg)
    }
}

/// Sign `message` with `private_key` over an `em_bits`-bit encoded message.
///
/// The salt is drawn from the operating system RNG. Returns the signature as
/// lowercase hex, zero-padded to twice the byte length of the modulus.
#[cfg(feature = "getrandom")]
pub fn sign(private_key: &SigningKey, message: &[u8], em_bits: usize) -> Result<String> {
    private_key
        .sign_with_em_bits(&mut OsRng, message, em_bits)
        .map(|signature| signature.to_hex())
}

/// Private exponent, wiped in place when dropped.
#[derive(Clone, PartialEq, Eq)]
struct PrivateExponent(BigUint);

impl Zeroize for PrivateExponent {
    fn zeroize(&mut self) {
        // `BigUint::set_zero` only truncates, so clear every digit in place.
        // Going upwards keeps the top digit, and thus the length, until last.
        for bit in 0..self.0.bits() {
            self.0.set_bit(bit, false);
        }
    }
}

/// `bitlen(n) - 1`, the largest encoding guaranteed to be below `n`.
pub(crate) fn default_em_bits(n: &BigUint) -> usize {
    (n.bits() as usize).saturating_sub(1)
}
