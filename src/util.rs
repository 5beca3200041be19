use crate::{DecodeError, KeyField};
use data_encoding::BASE64URL_NOPAD;
use num_bigint::BigUint;

/// Decodes one numeric JWK member (RFC 7518 §6.3): unpadded base64url holding
/// a big-endian unsigned integer of any length.
pub fn decode_uint(field: KeyField, value: &str) -> Result<BigUint, DecodeError> {
    let bytes = BASE64URL_NOPAD
        .decode(value.as_bytes())
        .map_err(|source| DecodeError { field, source })?;
    trace!("decoded {} bytes for jwk member `{field}`", bytes.len());
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Inverse of [`decode_uint`]; emits the minimal big-endian form, so zero
/// encodes as a single zero byte.
pub fn encode_uint(value: &BigUint) -> String {
    BASE64URL_NOPAD.encode(&value.to_bytes_be())
}
