//! Thin session layer over a native directory-access library.
//!
//! The native library is reached through the [`DirectoryClient`] trait; this
//! crate adds the failure-signaling path on top of it: whenever a primitive
//! operation returns a non-success code, [`dispatch_failure`] classifies the
//! code, collects the diagnostic messages and tears the session down.

pub mod client;
pub mod dispatch;
pub mod error;
pub mod session;

pub use client::{DiagnosticBuffer, DirectoryClient, SessionOption, DEBUG_ANY, VERSION3};
pub use dispatch::dispatch_failure;
pub use error::{SessionError, SessionResult};
pub use session::{initialize, set_option, simple_bind, unbind};

#[cfg(test)]
pub(crate) mod test_utils;
