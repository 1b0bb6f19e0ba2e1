//! Statically-typed taxonomy of LDAP result codes.
//!
//! Every result code defined by RFC 4511 (and the negative client-API range
//! of the C library) maps to exactly one [`ErrorKind`], and every kind
//! belongs to exactly one [`ErrorCategory`]. [`classify`] resolves a raw
//! code through a registry built once at first use; unknown codes resolve to
//! [`ErrorKind::Unspecified`] carrying the raw value.

pub mod codes;
pub mod kind;
pub mod registry;

pub use codes::ResultCode;
pub use kind::{ErrorCategory, ErrorKind};
pub use registry::classify;
