use crate::client::{DirectoryClient, SessionOption, DEBUG_ANY, VERSION3};
use crate::dispatch::dispatch_failure;
use crate::error::SessionResult;
use ldapglue_codes::ResultCode;
use tracing::{debug, instrument};

/// Open an LDAPv3 session against `uri`.
///
/// Mirrors the native initialize sequence: create the handle, enable
/// library tracing, switch to protocol version 3 and optionally start TLS.
/// Any failing step tears the session down and surfaces the classified
/// error; the handle is only handed to the caller once fully set up.
#[instrument(skip(client), level = "debug")]
pub fn initialize<C: DirectoryClient>(
    client: &C,
    uri: Option<&str>,
    start_tls: bool,
) -> SessionResult<C::Handle> {
    // ldaps is encrypted from the first byte and ldapi is a local socket,
    // so StartTLS only applies to plain ldap URIs.
    let start_tls = start_tls && uri.is_some_and(|uri| uri.starts_with("ldap:"));

    let (code, handle) = client.initialize(uri.map(String::from));
    if !code.is_success() {
        return Err(dispatch_failure(client, code, handle, false));
    }
    let handle = match handle {
        Some(handle) => handle,
        // Success without a handle means the native layer broke its own
        // contract; surface it as a parameter error.
        None => return Err(dispatch_failure(client, ResultCode::PARAM_ERROR, None, false)),
    };

    let handle = set_option(client, handle, SessionOption::DebugLevel, DEBUG_ANY)?;
    let handle = set_option(client, handle, SessionOption::ProtocolVersion, VERSION3)?;

    if start_tls {
        debug!("starting TLS");
        let code = client.start_tls(&handle);
        if !code.is_success() {
            return Err(dispatch_failure(client, code, Some(handle), true));
        }
    }
    Ok(handle)
}

/// Set a single native option.
///
/// The handle is returned on success; on failure it is consumed by the
/// dispatcher, which unbinds the session.
#[instrument(skip(client, handle), level = "debug")]
pub fn set_option<C: DirectoryClient>(
    client: &C,
    handle: C::Handle,
    option: SessionOption,
    value: i32,
) -> SessionResult<C::Handle> {
    let code = client.set_option(&handle, option, value);
    if code.is_success() {
        Ok(handle)
    } else {
        Err(dispatch_failure(client, code, Some(handle), true))
    }
}

/// Authenticate with a distinguished name and password.
#[instrument(skip(client, handle, password), level = "debug")]
pub fn simple_bind<C: DirectoryClient>(
    client: &C,
    handle: C::Handle,
    dn: &str,
    password: &str,
) -> SessionResult<C::Handle> {
    let code = client.simple_bind(&handle, dn, password);
    if code.is_success() {
        Ok(handle)
    } else {
        Err(dispatch_failure(client, code, Some(handle), true))
    }
}

/// Close a session cleanly.
pub fn unbind<C: DirectoryClient>(client: &C, handle: C::Handle) {
    client.unbind(handle);
}
