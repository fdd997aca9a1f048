use secrecy::Secret;
use serde::Deserialize;

/// How a secret string is turned into HMAC key bytes
///
/// - `Raw` uses the UTF-8 bytes of the string as-is
/// - `Hex` decodes the string as hexadecimal (either case)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretEncoding {
    #[default]
    Raw,
    Hex,
}

impl SecretEncoding {
    /// Maps the `is_hex` flag used by command line callers
    pub fn from_hex_flag(is_hex: bool) -> Self {
        if is_hex {
            SecretEncoding::Hex
        } else {
            SecretEncoding::Raw
        }
    }
}

/// Configuration for HS256 token signing and verification
///
/// # Security Note
/// HS256 is only sound with a secret of at least 256 bits (32 bytes). Shorter
/// secrets are accepted but logged as a warning.
///
/// # Example
/// ```rust
/// use jwt_gen::{SecretEncoding, SigningConfig};
/// use secrecy::Secret;
///
/// let config = SigningConfig {
///     secret: Secret::new("asev01L5kAa9145zJ5Zg3o08I8OINN8L".to_string()),
///     encoding: SecretEncoding::Raw,
/// };
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct SigningConfig {
    /// Shared secret, interpreted according to `encoding`
    ///
    /// Kept out of `Debug` output and never logged.
    pub secret: Secret<String>,
    /// Defaults to `raw` when omitted
    #[serde(default)]
    pub encoding: SecretEncoding,
}
