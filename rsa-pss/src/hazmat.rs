//! Low-level RSASSA-PSS building blocks.
//!
//! These work on raw encoded messages and skip the RSA exponentiation.
//! Prefer [`SigningKey`](crate::SigningKey) and
//! [`VerifyingKey`](crate::VerifyingKey) unless you are sure you need them.

pub use crate::{
    encoding::{emsa_pss_encode, emsa_pss_verify},
    mgf::{mgf1, xor},
};
