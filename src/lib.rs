//! # payloadqr - form input to scannable payloads
//!
//! payloadqr turns structured input (network credentials, links, phone
//! numbers, mail, text messages, contact cards, pictures, plain text) into the
//! single text payload a QR scanner expects, and renders that payload as a
//! QR code.
//!
//! ## Example Usage
//!
//! ```rust
//! use payloadqr::payload::{AuthType, NetworkFields, PayloadRequest};
//!
//! let request = PayloadRequest::Network(
//!     NetworkFields::new("Cafe;Guest", AuthType::Wpa, "espresso").hidden(true),
//! );
//!
//! let payload = request.encode().unwrap();
//! assert_eq!(payload, r"WIFI:T:WPA;S:Cafe\;Guest;P:espresso;H:true;;");
//! ```
//!
//! ## Modules
//!
//! - [`payload`]: Pure payload encoders, one per input type
//! - [`qr`]: QR code rendering (PNG, SVG, ASCII) and reading
//! - [`config`]: User settings stored in `~/.payloadqr/config.toml`

pub mod config;
pub mod payload;
pub mod qr;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, Settings};
pub use payload::{encode, PayloadKind, PayloadRequest, ValidationError};
pub use qr::{generate_qr, generate_qr_to_file, read_qr, QrConfig, QrError, QrFormat};
