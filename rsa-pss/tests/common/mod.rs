//! Shared test key and helpers.

#![allow(dead_code)]

use hex_literal::hex;
use rand_core::{impls, CryptoRng, RngCore};
use rsa_pss::{BigUint, SigningKey, VerifyingKey};

/// 2045-bit test modulus.
pub const N: [u8; 256] = hex!(
    "13f853b564ad44a46a73e9f10c353aaf34d439869b74b51c513910de1bfbdbfb"
    "c7f3a815469dafc1631526093f0821c7587eb78ad3bdb0f240af3146210d36a7"
    "f86c84503cf0c3c9dfb89a5bf1c62e210a3ae51ef02df2ab6f0301b720779083"
    "4dfb0d395ea92ef4e42152b847b015cf56e2735cdb9895045998c82ef2170ca7"
    "d5b064c5865e78fa1f8db252d6f48b62bae9296b9243f7e9c9e0753577171872"
    "4a204c76090a5d8c259dec19319368f46b492433f4598a80cccf81e7e3713888"
    "ab0c37a0f9f2bbdd5b4c287b2fd3dcd76b69a76e436a48c1b799c340d052b885"
    "7058dad97bf5fa36f0bef508e43cbb4d1799293312ab7f509de93cbc2f51aacf"
);

pub const D: [u8; 256] = hex!(
    "047a770341cd9d8c2597530a4c8b8f5a854566952a3d94f401bf036a5bea325e"
    "176c2bf08182914c9414c50fe3c3c61777600b77259eef94942ef5a4dd7aa21c"
    "2f18dedf439b56bce9dff335d5557538d19b7d905f9a5e4655c1dddb9c7b53bc"
    "2e7bb36e7f2cffabc9913384c206da0d4255cc3b31bfd9033db8868408a464a1"
    "085ed93dff0da6ce592dc8d8b75c6f750ad96910a7e03407ea78c096cc43b0e1"
    "2ea8fc0816a5b73ffa1df04b5b8aaca2bcbc2fe5d13aa594d983d0ddd7fb070c"
    "303b4adca6c1cb8ba69fb330178df2b447cd3cbe3db104a2a68fcc01c054ba25"
    "dd8ac45a232436a68f0ae9fdae543300a95802d99d1f9534143aea9fc2ad4a89"
);

pub const E: u32 = 65537;

/// `"hey"` signed with `em_bits = 512` and salt `00 01 .. 13`.
pub const HEY_512: &str = concat!(
    "0309439a19a2a1d3c3438e176d55d878cec3e49f24ed799dfabd80d0ec14e618",
    "d1dcf291b49ac66b4806f629485dcbd96721d69b5bb6322eb028d28dc2aa001f",
    "86662c9cabff52a9f31c42f680f0a490c0211a522a471d6d3902fbb04ead6e3e",
    "a3c03bd81a71cf41406957e146b32b43ef373bbb6864296e8aed83110cf154de",
    "829d02643340a7a0e8e5d73c60edfdf04338fd8a83fa7cda2a863c0bb8b61e49",
    "4c16c160e053704c7f5c7ce19a90cbc223ce93dd59fdd1b26dd6f7e30347bb1b",
    "6e763969d98b5c5def22129824f32cbb730991f73e163ef2bc87af46fdf56ad0",
    "52d3c73a771eb3924bae31739def5d6df5439168b48e056a7cc89b4bbc70197c",
);

/// `"hey"` signed with `em_bits = 2044` and salt `00 01 .. 13`.
pub const HEY_2044: &str = concat!(
    "0b44893f8b8b441a5632dfd2bd5e1f895803bd48deaa15dd1a092ef1cc46a3c1",
    "a8e24777a1cfff073c62ff80476c0d719c7f2e651c9a0687c537afcd4df127b5",
    "ef97ef0e30487ec429faf9cfd408b796b67fdde8b42400224b6fb35997312fcc",
    "2f8c9985441fb6579f2e5b33dec5700d7ea44a7010b9035043dff47471f68bd0",
    "d1b53489dc1cdb5625e976383df2a94557fb739fd09388f2c304b4ea170176db",
    "a3c5f50cc84243fa22a6fe04b6881e1503cb82bd18043bddf5d5095ac7010e85",
    "6a2658f8527943f1f6d49c54fa5fdbac96833c2d078b2593a3a82bdafa06e827",
    "c5f43897176c69e68d0c14102c0c7c998f1b4300ce563a5035c4ea9884dd9cda",
);

pub fn signing_key() -> SigningKey {
    SigningKey::from_components(BigUint::from_bytes_be(&D), BigUint::from_bytes_be(&N))
        .expect("valid signing key")
}

pub fn verifying_key() -> VerifyingKey {
    VerifyingKey::from_components(BigUint::from(E), BigUint::from_bytes_be(&N))
        .expect("valid verifying key")
}

/// Yields the bytes `00 01 02 ..`, so the first salt drawn is `00 01 .. 13`.
#[derive(Default)]
pub struct CountingRng(u8);

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.0;
            self.0 = self.0.wrapping_add(1);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for CountingRng {}
