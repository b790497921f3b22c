#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![warn(missing_docs, rust_2018_idioms)]

//!
//! # Examples
//!
//! Sign and verify with the free functions, which exchange signatures as
//! fixed-width hex strings:
//!
#![cfg_attr(feature = "getrandom", doc = "```no_run")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! # use rsa_pss::{BigUint, SigningKey, VerifyingKey};
//! # let read_modulus = || BigUint::default();
//! # let read_private_exponent = || BigUint::default();
//! # let read_public_exponent = || BigUint::default();
//! # || -> rsa_pss::Result<()> {
//! let n = read_modulus();
//! let signing_key = SigningKey::from_components(read_private_exponent(), n.clone())?;
//! let verifying_key = VerifyingKey::from_components(read_public_exponent(), n)?;
//!
//! let signature = rsa_pss::sign(&signing_key, b"hey", 512)?;
//! assert!(rsa_pss::verify(&verifying_key, &signature, b"hey", 512)?);
//! # Ok(())
//! # }();
//! ```
//!

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod hazmat;

mod consts;
mod encoding;
mod error;
mod mgf;
mod primitives;
mod sig;
mod signing_key;
mod verifying_key;

pub use crate::{
    consts::{H_LEN, MIN_EM_LEN, S_LEN, TRAILER},
    error::{Error, Result},
    sig::Signature,
    signing_key::SigningKey,
    verifying_key::{verify, VerifyingKey},
};

#[cfg(feature = "getrandom")]
pub use crate::signing_key::sign;

pub use num_bigint::BigUint;
pub use signature;
