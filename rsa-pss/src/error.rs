//! Error types

/// Errors returned by RSASSA-PSS operations.
///
/// Every way a signature can fail to verify collapses into
/// [`Error::Verification`]; the reason is never reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// `em_bits` is too small to hold the digest, salt and framing.
    #[error("encoding error: encoded message length {em_len} is below the minimum of {min}")]
    EncodingTooShort {
        /// Requested encoded message length in bytes.
        em_len: usize,
        /// Minimum encoded message length in bytes.
        min: usize,
    },
    /// `em_bits` passed for verification is too small to hold the digest,
    /// salt and framing.
    #[error("invalid parameters: encoded message length {em_len} is below the minimum of {min}")]
    InvalidParameters {
        /// Requested encoded message length in bytes.
        em_len: usize,
        /// Minimum encoded message length in bytes.
        min: usize,
    },
    /// Requested mask is longer than MGF1 can produce.
    #[error("mask too long")]
    InvalidLength,
    /// The encoded message does not fit below the modulus.
    #[error("modulus too small for the requested encoded message length")]
    ModulusTooSmall,
    /// A key component is out of range.
    #[error("invalid key component")]
    InvalidKey,
    /// Signature verification failed.
    #[error("signature verification failed")]
    Verification,
}

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> Self {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_err: Error) -> Self {
        signature::Error::new()
    }
}
