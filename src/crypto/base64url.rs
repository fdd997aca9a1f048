use crate::error::{JwsError, Result};
use base64::{
    alphabet,
    engine::{general_purpose::URL_SAFE_NO_PAD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

// Unpadded URL-safe alphabet; non-zero trailing bits in the last symbol are ignored.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Base64URL encode bytes without `=` padding
///
/// # Example
/// ```rust
/// use jwt_gen::crypto::base64url::encode;
///
/// assert_eq!(encode(br#"{"alg":"HS256"}"#), "eyJhbGciOiJIUzI1NiJ9");
/// ```
pub fn encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode an unpadded Base64URL string
///
/// # Returns
/// * `Ok(Vec<u8>)` - Decoded bytes
/// * `Err(JwsError::MalformedEncoding)` - Characters outside the URL-safe
///   alphabet, `=` padding, or an impossible input length
pub fn decode(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(input)
        .map_err(|e| JwsError::MalformedEncoding(format!("Failed to decode segment: {}", e)))
}
