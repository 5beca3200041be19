use std::fmt;
use thiserror::Error;

/// Numeric members of an RSA JWK, named by their wire names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyField {
    Modulus,
    Exponent,
}

impl KeyField {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Modulus => "n",
            Self::Exponent => "e",
        }
    }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A numeric member was not valid unpadded base64url.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("invalid base64url in jwk member `{field}`: {source}")]
pub struct DecodeError {
    pub field: KeyField,
    pub source: data_encoding::DecodeError,
}
