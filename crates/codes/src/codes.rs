use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Integer status returned by an LDAP operation.
///
/// Positive values are the RFC 4511 result codes returned by the server;
/// the negative range is the client API error space of the native library.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, From, Serialize, Deserialize,
)]
#[display("{_0}")]
pub struct ResultCode(i32);

impl ResultCode {
    // Non-error codes. COMPARE_FALSE and COMPARE_TRUE are expected results
    // of a compare operation and are deliberately not registered as error
    // kinds.
    pub const SUCCESS: Self = Self(0);
    pub const COMPARE_FALSE: Self = Self(5);
    pub const COMPARE_TRUE: Self = Self(6);

    // RFC 4511 result codes.
    pub const OPERATIONS_ERROR: Self = Self(1);
    pub const PROTOCOL_ERROR: Self = Self(2);
    pub const TIMELIMIT_EXCEEDED: Self = Self(3);
    pub const SIZELIMIT_EXCEEDED: Self = Self(4);
    pub const AUTH_METHOD_NOT_SUPPORTED: Self = Self(7);
    pub const STRONG_AUTH_REQUIRED: Self = Self(8);
    pub const REFERRAL: Self = Self(10);
    pub const ADMINLIMIT_EXCEEDED: Self = Self(11);
    pub const UNAVAILABLE_CRITICAL_EXTENSION: Self = Self(12);
    pub const CONFIDENTIALITY_REQUIRED: Self = Self(13);
    pub const SASL_BIND_IN_PROGRESS: Self = Self(14);
    pub const NO_SUCH_ATTRIBUTE: Self = Self(16);
    pub const UNDEFINED_TYPE: Self = Self(17);
    pub const INAPPROPRIATE_MATCHING: Self = Self(18);
    pub const CONSTRAINT_VIOLATION: Self = Self(19);
    pub const TYPE_OR_VALUE_EXISTS: Self = Self(20);
    pub const INVALID_SYNTAX: Self = Self(21);
    pub const NO_SUCH_OBJECT: Self = Self(32);
    pub const ALIAS_PROBLEM: Self = Self(33);
    pub const INVALID_DN_SYNTAX: Self = Self(34);
    pub const ALIAS_DEREF_PROBLEM: Self = Self(36);
    pub const X_PROXY_AUTHZ_FAILURE: Self = Self(47);
    pub const INAPPROPRIATE_AUTH: Self = Self(48);
    pub const INVALID_CREDENTIALS: Self = Self(49);
    pub const INSUFFICIENT_ACCESS: Self = Self(50);
    pub const BUSY: Self = Self(51);
    pub const UNAVAILABLE: Self = Self(52);
    pub const UNWILLING_TO_PERFORM: Self = Self(53);
    pub const LOOP_DETECT: Self = Self(54);
    pub const NAMING_VIOLATION: Self = Self(64);
    pub const OBJECT_CLASS_VIOLATION: Self = Self(65);
    pub const NOT_ALLOWED_ON_NONLEAF: Self = Self(66);
    pub const NOT_ALLOWED_ON_RDN: Self = Self(67);
    pub const ALREADY_EXISTS: Self = Self(68);
    pub const NO_OBJECT_CLASS_MODS: Self = Self(69);
    pub const RESULTS_TOO_LARGE: Self = Self(70);
    pub const AFFECTS_MULTIPLE_DSAS: Self = Self(71);

    // Client API error codes of the native library, negative by convention.
    pub const SERVER_DOWN: Self = Self(-1);
    pub const LOCAL_ERROR: Self = Self(-2);
    pub const ENCODING_ERROR: Self = Self(-3);
    pub const DECODING_ERROR: Self = Self(-4);
    pub const TIMEOUT: Self = Self(-5);
    pub const AUTH_UNKNOWN: Self = Self(-6);
    pub const FILTER_ERROR: Self = Self(-7);
    pub const USER_CANCELLED: Self = Self(-8);
    pub const PARAM_ERROR: Self = Self(-9);
    pub const NO_MEMORY: Self = Self(-10);
    pub const CONNECT_ERROR: Self = Self(-11);
    pub const NOT_SUPPORTED: Self = Self(-12);
    pub const CONTROL_NOT_FOUND: Self = Self(-13);
    pub const NO_RESULTS_RETURNED: Self = Self(-14);
    pub const CLIENT_LOOP: Self = Self(-16);
    pub const REFERRAL_LIMIT_EXCEEDED: Self = Self(-17);
    pub const X_CONNECTING: Self = Self(-18);

    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}
