use crate::{
    config::SecretEncoding,
    error::{JwsError, Result},
};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretVec};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Smallest secret considered sound for HS256
pub const MIN_SECRET_LEN: usize = 32;

/// Compute HMAC-SHA256 over `message` with `key` (RFC 2104)
///
/// Any key length is accepted; keys longer than the block size are hashed
/// first, as the RFC prescribes.
///
/// # Example
/// ```rust
/// use jwt_gen::crypto::mac::mac;
///
/// let digest = mac(b"key", b"The quick brown fox jumps over the lazy dog").unwrap();
/// assert_eq!(
///     hex::encode(digest),
///     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
/// );
/// ```
pub fn mac(key: &[u8], message: &[u8]) -> Result<[u8; DIGEST_LEN]> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| JwsError::Crypto(format!("Failed to initialise HMAC: {}", e)))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().into())
}

/// Resolve a secret string into HMAC key bytes
///
/// # Arguments
/// * `input` - Secret as supplied by the caller
/// * `encoding` - `Raw` takes the UTF-8 bytes unchanged, `Hex` decodes hexadecimal
///
/// # Returns
/// * `Ok(SecretVec<u8>)` - Key bytes, zeroized on drop
/// * `Err(JwsError::InvalidHexSecret)` - Odd length or non-hex characters in hex mode
pub fn secret_bytes(input: &str, encoding: SecretEncoding) -> Result<SecretVec<u8>> {
    let bytes = match encoding {
        SecretEncoding::Raw => input.as_bytes().to_vec(),
        SecretEncoding::Hex => hex::decode(input)
            .map_err(|e| JwsError::InvalidHexSecret(format!("Failed to decode secret: {}", e)))?,
    };

    if bytes.len() < MIN_SECRET_LEN {
        tracing::warn!(
            secret_len = bytes.len(),
            min_len = MIN_SECRET_LEN,
            "HS256 secret is shorter than recommended"
        );
    }

    Ok(SecretVec::new(bytes))
}

/// Convenience wrapper: resolve the secret and MAC `message` with it
pub(crate) fn mac_with_secret(
    input: &str,
    encoding: SecretEncoding,
    message: &[u8],
) -> Result<[u8; DIGEST_LEN]> {
    let key = secret_bytes(input, encoding)?;
    mac(key.expose_secret(), message)
}
