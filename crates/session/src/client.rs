use ldapglue_codes::ResultCode;

/// Debug level enabling all trace categories of the native library.
pub const DEBUG_ANY: i32 = -1;
/// Protocol version 3, the only version this layer speaks.
pub const VERSION3: i32 = 3;

/// Options forwarded to the native set-option call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    DebugLevel,
    ProtocolVersion,
}

impl SessionOption {
    /// The C API option code.
    pub const fn raw(self) -> i32 {
        match self {
            SessionOption::DebugLevel => 0x5001,
            SessionOption::ProtocolVersion => 0x0011,
        }
    }
}

/// View over a native-allocated diagnostic buffer.
///
/// Implementations release the underlying allocation on drop, so the buffer
/// must only live for as long as it takes to copy the message out.
pub trait DiagnosticBuffer {
    fn as_str(&self) -> &str;
}

impl DiagnosticBuffer for String {
    fn as_str(&self) -> &str {
        self
    }
}

/// Boundary to the native directory-access library.
///
/// `Handle` is the opaque connection owned by the caller until it is passed
/// to [`DirectoryClient::unbind`]; a handle given up that way can never be
/// used again, which the by-value signature enforces.
pub trait DirectoryClient {
    type Handle;
    type Diagnostic: DiagnosticBuffer;

    /// Open a connection; `None` falls back to the library's default URI.
    /// A handle may come back even on failure, in which case it is not yet
    /// valid for option or diagnostic calls. The URI is owned because the
    /// native layer keeps its own NUL-terminated copy.
    fn initialize(&self, uri: Option<String>) -> (ResultCode, Option<Self::Handle>);

    fn set_option(&self, handle: &Self::Handle, option: SessionOption, value: i32) -> ResultCode;

    fn start_tls(&self, handle: &Self::Handle) -> ResultCode;

    fn simple_bind(&self, handle: &Self::Handle, dn: &str, password: &str) -> ResultCode;

    /// Render the standard human-readable string for a code. `None` means
    /// the rendering primitive itself failed.
    fn code_to_string(&self, code: ResultCode) -> Option<String>;

    /// Fetch the connection-specific diagnostic message, if the server left
    /// one on the session.
    fn diagnostic_message(&self, handle: &Self::Handle) -> Option<Self::Diagnostic>;

    /// Close the session and release its resources.
    fn unbind(&self, handle: Self::Handle);
}
