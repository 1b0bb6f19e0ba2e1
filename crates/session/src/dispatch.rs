use crate::client::{DiagnosticBuffer, DirectoryClient};
use crate::error::SessionError;
use ldapglue_codes::{classify, ResultCode};
use tracing::debug;

/// Build the failure for a non-success result code.
///
/// The base message is the native library's rendering of the code; a failure
/// of the renderer itself is replaced with a fallback line naming the code,
/// never propagated over the primary failure. With a valid handle the
/// connection-specific diagnostic message is appended as a second line and
/// the session is unbound: an errored session is never left half-initialized
/// for the caller to stumble over.
pub fn dispatch_failure<C: DirectoryClient>(
    client: &C,
    code: ResultCode,
    handle: Option<C::Handle>,
    handle_valid: bool,
) -> SessionError {
    let kind = classify(code);
    let mut messages = vec![client
        .code_to_string(code)
        .unwrap_or_else(|| format!("error resolving result code {code}"))];

    if handle_valid {
        if let Some(handle) = handle {
            // The diagnostic buffer is native-allocated: copy the message
            // out and let the drop at the end of this block release it,
            // before the handle itself goes away.
            if let Some(buffer) = client.diagnostic_message(&handle) {
                messages.push(buffer.as_str().to_owned());
            }
            client.unbind(handle);
        }
    }

    debug!(?kind, code = code.raw(), "classified session failure");
    SessionError { kind, messages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{client_with_renderer, FakeHandle, MockTestDirectoryClient};
    use ldapglue_codes::{ErrorCategory, ErrorKind};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_handle_skips_diagnostics_and_unbind() {
        // No expectations on diagnostic_message or unbind: calling either
        // would fail the test.
        let client = client_with_renderer();
        let error = dispatch_failure(
            &client,
            ResultCode::SERVER_DOWN,
            Some(FakeHandle(1)),
            false,
        );
        assert_eq!(error.kind, ErrorKind::ServerDown);
        assert_eq!(error.messages, vec!["Can't contact LDAP server".to_string()]);
    }

    #[test]
    fn test_missing_handle_skips_diagnostics_and_unbind() {
        let client = client_with_renderer();
        let error = dispatch_failure(&client, ResultCode::TIMEOUT, None, true);
        assert_eq!(error.kind, ErrorKind::Timeout);
        assert_eq!(error.messages.len(), 1);
    }

    #[test]
    fn test_diagnostic_message_becomes_the_second_line() {
        let mut client = client_with_renderer();
        client
            .expect_diagnostic_message()
            .with(eq(FakeHandle(7)))
            .times(1)
            .returning(|_| Some("additional info".to_string()));
        client
            .expect_unbind()
            .with(eq(FakeHandle(7)))
            .times(1)
            .return_const(());

        let error = dispatch_failure(
            &client,
            ResultCode::NO_SUCH_OBJECT,
            Some(FakeHandle(7)),
            true,
        );
        assert_eq!(error.kind, ErrorKind::NoSuchObject);
        assert_eq!(error.category(), ErrorCategory::Name);
        assert_eq!(
            error.messages,
            vec!["No such object".to_string(), "additional info".to_string()]
        );
        assert_eq!(error.message(), "No such object\n  additional info");
    }

    #[test]
    fn test_absent_diagnostic_leaves_a_single_line() {
        let mut client = client_with_renderer();
        client
            .expect_diagnostic_message()
            .times(1)
            .returning(|_| None);
        client.expect_unbind().times(1).return_const(());

        let error = dispatch_failure(
            &client,
            ResultCode::INVALID_CREDENTIALS,
            Some(FakeHandle(3)),
            true,
        );
        assert_eq!(error.kind, ErrorKind::InvalidCredentials);
        assert_eq!(error.category(), ErrorCategory::Security);
        assert_eq!(error.messages, vec!["Invalid credentials".to_string()]);
    }

    #[test]
    fn test_unknown_code_dispatches_as_unspecified() {
        let client = client_with_renderer();
        let code = ResultCode::from(9999);
        let error = dispatch_failure(&client, code, None, false);
        assert_eq!(error.kind, ErrorKind::Unspecified(code));
        assert_eq!(error.category(), ErrorCategory::Unspecified);
        assert!(error.message().contains("9999"));
    }

    #[test]
    fn test_renderer_failure_falls_back_to_naming_the_code() {
        let mut client = MockTestDirectoryClient::new();
        client.expect_code_to_string().returning(|_| None);

        let error = dispatch_failure(&client, ResultCode::NO_SUCH_OBJECT, None, false);
        // Classification still succeeds, only the message is degraded.
        assert_eq!(error.kind, ErrorKind::NoSuchObject);
        assert_eq!(
            error.messages,
            vec!["error resolving result code 32".to_string()]
        );
    }
}
