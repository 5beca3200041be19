use crate::{decode_uint, encode_uint, DecodeError, KeyField, RsaPublicKey};

/// One entry of a JSON Web Key Set (RFC 7517 §4). Only `n` and `e` are read
/// when converting; the remaining members ride along untouched.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(rename = "n")]
    pub modulus: String,
    #[serde(rename = "e")]
    pub exponent: String,
}

impl JsonKey {
    /// Decodes `n` and `e` as big-endian unsigned integers of any length.
    pub fn rsa(&self) -> Result<RsaPublicKey, DecodeError> {
        let exponent = decode_uint(KeyField::Exponent, &self.exponent).map_err(|err| self.rejected(err))?;
        let modulus = decode_uint(KeyField::Modulus, &self.modulus).map_err(|err| self.rejected(err))?;
        let key = RsaPublicKey { modulus, exponent };
        debug!(
            "converted jwk {:?} into a {} bit rsa public key",
            self.kid,
            key.modulus_bits()
        );
        Ok(key)
    }

    fn rejected(&self, err: DecodeError) -> DecodeError {
        debug!("rejected jwk {:?}: {err}", self.kid);
        err
    }
}

impl TryFrom<&JsonKey> for RsaPublicKey {
    type Error = DecodeError;
    fn try_from(key: &JsonKey) -> Result<Self, Self::Error> {
        key.rsa()
    }
}

impl From<&RsaPublicKey> for JsonKey {
    fn from(key: &RsaPublicKey) -> Self {
        JsonKey {
            kty: Some("RSA".into()),
            modulus: encode_uint(&key.modulus),
            exponent: encode_uint(&key.exponent),
            ..Default::default()
        }
    }
}

/// A JSON Web Key Set document (RFC 7517 §5).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonKeySet {
    pub keys: Vec<JsonKey>,
}

impl JsonKeySet {
    /// Converts every member in document order, failing on the first bad one.
    pub fn rsa_keys(&self) -> Result<Vec<(Option<&str>, RsaPublicKey)>, DecodeError> {
        self.keys
            .iter()
            .map(|key| key.rsa().map(|rsa| (key.kid.as_deref(), rsa)))
            .collect()
    }
}
