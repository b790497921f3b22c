//!
//! Module containing the definition of the Signature container
//!

use alloc::{boxed::Box, string::String, vec::Vec};
use core::{
    fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex},
    str::FromStr,
};
use signature::SignatureEncoding;

/// RSASSA-PSS signature.
///
/// Holds the big-endian signature representative, left-padded with zeros to
/// the byte length of the modulus. Its hex form keeps that width.
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct Signature {
    bytes: Box<[u8]>,
}

impl Signature {
    /// Lowercase hex encoding, two digits per byte.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Signature length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false` for signatures produced by this crate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl SignatureEncoding for Signature {
    type Repr = Box<[u8]>;
}

impl From<Box<[u8]>> for Signature {
    fn from(bytes: Box<[u8]>) -> Self {
        Self { bytes }
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        bytes.into_boxed_slice().into()
    }
}

impl From<Signature> for Box<[u8]> {
    fn from(signature: Signature) -> Box<[u8]> {
        signature.bytes
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        if bytes.is_empty() {
            return Err(signature::Error::new());
        }

        Ok(Self {
            bytes: bytes.into(),
        })
    }
}

impl FromStr for Signature {
    type Err = signature::Error;

    fn from_str(s: &str) -> signature::Result<Self> {
        let bytes = hex::decode(s).map_err(|_| signature::Error::new())?;
        Self::try_from(bytes.as_slice())
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rsa_pss::Signature({:x})", self)
    }
}

impl LowerHex for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl UpperHex for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.iter() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use alloc::{format, string::ToString, vec};
    use signature::SignatureEncoding;

    #[test]
    fn hex_keeps_leading_zeros() {
        let sig = Signature::from(vec![0x00, 0x0a, 0xbc]);

        assert_eq!(sig.to_hex(), "000abc");
        assert_eq!(sig.to_string(), "000abc");
        assert_eq!(format!("{:X}", sig), "000ABC");
        assert_eq!(sig.len(), 3);
    }

    #[test]
    fn parse_hex() {
        let sig: Signature = "000ABC".parse().unwrap();
        assert_eq!(sig.as_ref(), [0x00u8, 0x0a, 0xbc]);
        assert_eq!(sig.to_vec(), vec![0x00u8, 0x0a, 0xbc]);
    }

    #[test]
    fn parse_rejects_bad_hex() {
        assert!("".parse::<Signature>().is_err());
        assert!("abc".parse::<Signature>().is_err());
        assert!("zz".parse::<Signature>().is_err());
    }
}
