pub mod base64url;
pub mod jws;
pub mod mac;

// Re-export main functions for easier access
pub use jws::{sign, verify_and_decode};
