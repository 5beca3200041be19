use crate::encode_uint;
use jsonwebtoken::DecodingKey;
use num_bigint::BigUint;
use ring::signature::RsaPublicKeyComponents;

/// Public half of an RSA key. Construction never validates the parameters;
/// that is left to whichever verifier consumes the key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RsaPublicKey {
    pub modulus: BigUint,
    pub exponent: BigUint,
}

impl RsaPublicKey {
    pub fn new(modulus: BigUint, exponent: BigUint) -> Self {
        Self { modulus, exponent }
    }

    pub fn modulus_bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// `None` if the exponent does not fit in 64 bits.
    pub fn exponent_u64(&self) -> Option<u64> {
        u64::try_from(&self.exponent).ok()
    }

    /// Big-endian components for `ring::signature::RsaPublicKeyComponents::verify`.
    pub fn components(&self) -> RsaPublicKeyComponents<Vec<u8>> {
        RsaPublicKeyComponents {
            n: self.modulus.to_bytes_be(),
            e: self.exponent.to_bytes_be(),
        }
    }

    pub fn decoding_key(&self) -> Result<DecodingKey, jsonwebtoken::errors::Error> {
        DecodingKey::from_rsa_components(&encode_uint(&self.modulus), &encode_uint(&self.exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_u64_bounds() {
        let key = RsaPublicKey::new(BigUint::from(3233u32), BigUint::from(65537u32));
        assert_eq!(key.exponent_u64(), Some(65537));

        let wide = RsaPublicKey::new(BigUint::from(3233u32), BigUint::from_bytes_be(&[1; 9]));
        assert_eq!(wide.exponent_u64(), None);
    }

    #[test]
    fn components_are_minimal_big_endian() {
        let key = RsaPublicKey::new(BigUint::from_bytes_be(&[0, 0xc1, 0x05]), BigUint::from(65537u32));
        let components = key.components();
        assert_eq!(components.n, vec![0xc1, 0x05]);
        assert_eq!(components.e, vec![0x01, 0x00, 0x01]);
        assert_eq!(key.modulus_bits(), 16);
    }
}
