use thiserror::Error;

/// Token signing and verification errors
///
/// Every failure is returned to the caller as a value. An invalid signature is
/// not an error: it is reported through [`crate::DecodeResult::valid`].
///
/// # Example
/// ```rust
/// use jwt_gen::{JwsError, Result};
///
/// fn handle_result(result: Result<String>) {
///     match result {
///         Ok(token) => println!("Token: {}", token),
///         Err(JwsError::InvalidHexSecret(msg)) => println!("Bad secret: {}", msg),
///         Err(JwsError::MalformedToken) => println!("Not a compact JWS"),
///         Err(e) => println!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JwsError {
    /// Secret string is not valid hexadecimal while hex mode was requested
    ///
    /// This error occurs when:
    /// - The string has an odd number of characters
    /// - The string contains characters outside `0-9a-fA-F`
    #[error("Invalid hex secret: {0}")]
    InvalidHexSecret(String),

    /// A token segment is not valid unpadded Base64URL
    ///
    /// Also used when a decoded payload does not have the expected claim shape.
    #[error("Base64URL decode error: {0}")]
    MalformedEncoding(String),

    /// Token does not split into exactly three non-empty dot-separated segments
    #[error("Invalid or malformed JWS token")]
    MalformedToken,

    /// Decoded header is not a JSON object with `alg` set to `HS256`
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Unexpected failure of the MAC primitive or of JSON serialization
    #[error("Cryptographic error: {0}")]
    Crypto(String),
}

pub type Result<T> = std::result::Result<T, JwsError>;
