//! Immutable value types for HTTP message metadata.
//!
//! The types here model metadata that a caller has already extracted or
//! intends to emit: status codes, protocol versions, request methods,
//! headers and `Set-Cookie` attribute sets. Nothing in this crate performs
//! I/O or parses raw messages.
//!
//! ```
//! use httpmeta::{cookie::SetCookie, status::Status};
//!
//! let status = Status::of(404).unwrap();
//! assert_eq!(status.to_string(), "404 Not Found");
//! assert!(status.is_client_error());
//!
//! let cookie = SetCookie::new("id", "v1").unwrap().with_max_age(5000);
//! assert_eq!(cookie.max_age(), 5000);
//! ```
pub mod cookie;
pub mod error;
pub mod fields;
pub mod header;
pub mod line;
pub mod method;
pub mod parse;
pub mod status;
pub mod version;
