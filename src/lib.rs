//! # jwt-gen
//!
//! A small Rust library and command line tool for **HS256 JSON Web Signatures**.
//! It issues compact tokens carrying a single `custom_user_id` claim and decodes
//! and verifies such tokens against a shared secret.
//!
//! ## Features
//!
//! - **HMAC-SHA256 only** - Tokens are `{"alg":"HS256"}` signed, nothing else is accepted
//! - **Raw or hex secrets** - Use the secret text as-is or decode it from hexadecimal
//! - **Constant-time verification** - Signatures are compared without timing leaks
//! - **Typed errors** - Malformed input is returned as a [`JwsError`], never a panic
//! - **Stateless design** - Every call is a pure function of its inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use jwt_gen::{SecretEncoding, SigningConfig, TokenService};
//! use secrecy::Secret;
//!
//! let service = TokenService::new(SigningConfig {
//!     secret: Secret::new("asev01L5kAa9145zJ5Zg3o08I8OINN8L".to_string()),
//!     encoding: SecretEncoding::Raw,
//! });
//!
//! let token = service.generate("bond007").unwrap();
//! let result = service.decode(&token).unwrap();
//!
//! assert!(result.valid);
//! assert_eq!(result.header, r#"{"alg":"HS256"}"#);
//! assert_eq!(result.payload, r#"{"custom_user_id":"bond007"}"#);
//! ```
//!
//! ## Examples
//!
//! See the [basic_workflow example](demos/basic_workflow.rs):
//!
//! ```bash
//! cargo run --example basic_workflow
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod service;

// Re-export main types for easier access
pub use config::{SecretEncoding, SigningConfig};
pub use crypto::jws::{sign, verify_and_decode, Claims, DecodeResult, Header};
pub use crypto::mac::secret_bytes;
pub use error::{JwsError, Result};
pub use service::TokenService;
