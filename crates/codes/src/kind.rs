use crate::codes::ResultCode;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Grouping of related [`ErrorKind`]s for coarse-grained handling.
///
/// `Uncategorized` holds the top-level protocol failures that RFC 4511 does
/// not assign to a family; `Unspecified` is reserved for codes outside the
/// known domain.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum ErrorCategory {
    Attribute,
    Name,
    Security,
    Service,
    Update,
    Api,
    Uncategorized,
    Unspecified,
}

impl ErrorCategory {
    /// All kinds belonging to this category.
    ///
    /// Derived from the per-kind tag, so the category→kinds index cannot
    /// drift from the kind→category assignment.
    pub fn kinds(self) -> impl Iterator<Item = ErrorKind> {
        ErrorKind::iter()
            .filter(move |kind| !matches!(kind, ErrorKind::Unspecified(_)) && kind.category() == self)
    }
}

/// Concrete classified failure, one variant per known result code.
///
/// The display strings follow the wording of the C library's code renderer;
/// they are the static per-code description, not the connection-specific
/// diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Error)]
pub enum ErrorKind {
    // Top-level, uncategorized.
    #[error("Operations error")]
    OperationsError,
    #[error("Protocol error")]
    ProtocolError,
    #[error("Time limit exceeded")]
    TimelimitExceeded,
    #[error("Size limit exceeded")]
    SizelimitExceeded,
    #[error("Authentication method not supported")]
    AuthMethodNotSupported,
    #[error("Strong(er) authentication required")]
    StrongAuthRequired,
    #[error("Referral")]
    Referral,
    #[error("Administrative limit exceeded")]
    AdminlimitExceeded,
    #[error("Critical extension is unavailable")]
    UnavailableCriticalExtension,
    #[error("Confidentiality required")]
    ConfidentialityRequired,
    #[error("SASL bind in progress")]
    SaslBindInProgress,

    // Attribute errors.
    #[error("No such attribute")]
    NoSuchAttribute,
    #[error("Undefined attribute type")]
    UndefinedType,
    #[error("Inappropriate matching")]
    InappropriateMatching,
    #[error("Constraint violation")]
    ConstraintViolation,
    #[error("Type or value exists")]
    TypeOrValueExists,
    #[error("Invalid syntax")]
    InvalidSyntax,

    // Naming errors.
    #[error("No such object")]
    NoSuchObject,
    #[error("Alias problem")]
    AliasProblem,
    #[error("Invalid DN syntax")]
    InvalidDNSyntax,
    #[error("Alias dereferencing problem")]
    AliasDerefProblem,

    // Security errors.
    #[error("Proxy authorization failure")]
    XProxyAuthzFailure,
    #[error("Inappropriate authentication")]
    InappropriateAuth,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Insufficient access")]
    InsufficientAccess,

    // Service errors.
    #[error("Server is busy")]
    Busy,
    #[error("Server is unavailable")]
    Unavailable,
    #[error("Server is unwilling to perform")]
    UnwillingToPerform,
    #[error("Loop detected")]
    LoopDetect,

    // Update errors.
    #[error("Naming violation")]
    NamingViolation,
    #[error("Object class violation")]
    ObjectClassViolation,
    #[error("Operation not allowed on non-leaf")]
    NotAllowedOnNonleaf,
    #[error("Operation not allowed on RDN")]
    NotAllowedOnRDN,
    #[error("Already exists")]
    AlreadyExists,
    #[error("Cannot modify object class")]
    NoObjectClassMods,
    #[error("Results too large")]
    ResultsTooLarge,
    #[error("Operation affects multiple DSAs")]
    AffectsMultipleDSAs,

    // Client API errors, reported by the library rather than the server.
    #[error("Can't contact LDAP server")]
    ServerDown,
    #[error("Local error")]
    LocalError,
    #[error("Encoding error")]
    EncodingError,
    #[error("Decoding error")]
    DecodingError,
    #[error("Timed out")]
    Timeout,
    #[error("Unknown authentication method")]
    AuthUnknown,
    #[error("Bad search filter")]
    FilterError,
    #[error("User cancelled operation")]
    UserCancelled,
    #[error("Bad parameter to an LDAP routine")]
    ParamError,
    #[error("Out of memory")]
    NoMemory,
    #[error("Connect error")]
    ConnectError,
    #[error("Not supported")]
    NotSupported,
    #[error("Control not found")]
    ControlNotFound,
    #[error("No results returned")]
    NoResultsReturned,
    #[error("Client loop")]
    ClientLoop,
    #[error("Referral limit exceeded")]
    ReferralLimitExceeded,
    #[error("Connecting")]
    XConnecting,

    /// A code outside the known domain, kept verbatim.
    #[error("Unspecified result code {0}")]
    Unspecified(ResultCode),
}

impl ErrorKind {
    /// The result code this kind was declared for.
    pub const fn code(self) -> ResultCode {
        match self {
            ErrorKind::OperationsError => ResultCode::OPERATIONS_ERROR,
            ErrorKind::ProtocolError => ResultCode::PROTOCOL_ERROR,
            ErrorKind::TimelimitExceeded => ResultCode::TIMELIMIT_EXCEEDED,
            ErrorKind::SizelimitExceeded => ResultCode::SIZELIMIT_EXCEEDED,
            ErrorKind::AuthMethodNotSupported => ResultCode::AUTH_METHOD_NOT_SUPPORTED,
            ErrorKind::StrongAuthRequired => ResultCode::STRONG_AUTH_REQUIRED,
            ErrorKind::Referral => ResultCode::REFERRAL,
            ErrorKind::AdminlimitExceeded => ResultCode::ADMINLIMIT_EXCEEDED,
            ErrorKind::UnavailableCriticalExtension => ResultCode::UNAVAILABLE_CRITICAL_EXTENSION,
            ErrorKind::ConfidentialityRequired => ResultCode::CONFIDENTIALITY_REQUIRED,
            ErrorKind::SaslBindInProgress => ResultCode::SASL_BIND_IN_PROGRESS,
            ErrorKind::NoSuchAttribute => ResultCode::NO_SUCH_ATTRIBUTE,
            ErrorKind::UndefinedType => ResultCode::UNDEFINED_TYPE,
            ErrorKind::InappropriateMatching => ResultCode::INAPPROPRIATE_MATCHING,
            ErrorKind::ConstraintViolation => ResultCode::CONSTRAINT_VIOLATION,
            ErrorKind::TypeOrValueExists => ResultCode::TYPE_OR_VALUE_EXISTS,
            ErrorKind::InvalidSyntax => ResultCode::INVALID_SYNTAX,
            ErrorKind::NoSuchObject => ResultCode::NO_SUCH_OBJECT,
            ErrorKind::AliasProblem => ResultCode::ALIAS_PROBLEM,
            ErrorKind::InvalidDNSyntax => ResultCode::INVALID_DN_SYNTAX,
            ErrorKind::AliasDerefProblem => ResultCode::ALIAS_DEREF_PROBLEM,
            ErrorKind::XProxyAuthzFailure => ResultCode::X_PROXY_AUTHZ_FAILURE,
            ErrorKind::InappropriateAuth => ResultCode::INAPPROPRIATE_AUTH,
            ErrorKind::InvalidCredentials => ResultCode::INVALID_CREDENTIALS,
            ErrorKind::InsufficientAccess => ResultCode::INSUFFICIENT_ACCESS,
            ErrorKind::Busy => ResultCode::BUSY,
            ErrorKind::Unavailable => ResultCode::UNAVAILABLE,
            ErrorKind::UnwillingToPerform => ResultCode::UNWILLING_TO_PERFORM,
            ErrorKind::LoopDetect => ResultCode::LOOP_DETECT,
            ErrorKind::NamingViolation => ResultCode::NAMING_VIOLATION,
            ErrorKind::ObjectClassViolation => ResultCode::OBJECT_CLASS_VIOLATION,
            ErrorKind::NotAllowedOnNonleaf => ResultCode::NOT_ALLOWED_ON_NONLEAF,
            ErrorKind::NotAllowedOnRDN => ResultCode::NOT_ALLOWED_ON_RDN,
            ErrorKind::AlreadyExists => ResultCode::ALREADY_EXISTS,
            ErrorKind::NoObjectClassMods => ResultCode::NO_OBJECT_CLASS_MODS,
            ErrorKind::ResultsTooLarge => ResultCode::RESULTS_TOO_LARGE,
            ErrorKind::AffectsMultipleDSAs => ResultCode::AFFECTS_MULTIPLE_DSAS,
            ErrorKind::ServerDown => ResultCode::SERVER_DOWN,
            ErrorKind::LocalError => ResultCode::LOCAL_ERROR,
            ErrorKind::EncodingError => ResultCode::ENCODING_ERROR,
            ErrorKind::DecodingError => ResultCode::DECODING_ERROR,
            ErrorKind::Timeout => ResultCode::TIMEOUT,
            ErrorKind::AuthUnknown => ResultCode::AUTH_UNKNOWN,
            ErrorKind::FilterError => ResultCode::FILTER_ERROR,
            ErrorKind::UserCancelled => ResultCode::USER_CANCELLED,
            ErrorKind::ParamError => ResultCode::PARAM_ERROR,
            ErrorKind::NoMemory => ResultCode::NO_MEMORY,
            ErrorKind::ConnectError => ResultCode::CONNECT_ERROR,
            ErrorKind::NotSupported => ResultCode::NOT_SUPPORTED,
            ErrorKind::ControlNotFound => ResultCode::CONTROL_NOT_FOUND,
            ErrorKind::NoResultsReturned => ResultCode::NO_RESULTS_RETURNED,
            ErrorKind::ClientLoop => ResultCode::CLIENT_LOOP,
            ErrorKind::ReferralLimitExceeded => ResultCode::REFERRAL_LIMIT_EXCEEDED,
            ErrorKind::XConnecting => ResultCode::X_CONNECTING,
            ErrorKind::Unspecified(code) => code,
        }
    }

    /// The category this kind belongs to. Total over all variants.
    pub const fn category(self) -> ErrorCategory {
        match self {
            ErrorKind::OperationsError
            | ErrorKind::ProtocolError
            | ErrorKind::TimelimitExceeded
            | ErrorKind::SizelimitExceeded
            | ErrorKind::AuthMethodNotSupported
            | ErrorKind::StrongAuthRequired
            | ErrorKind::Referral
            | ErrorKind::AdminlimitExceeded
            | ErrorKind::UnavailableCriticalExtension
            | ErrorKind::ConfidentialityRequired
            | ErrorKind::SaslBindInProgress => ErrorCategory::Uncategorized,
            ErrorKind::NoSuchAttribute
            | ErrorKind::UndefinedType
            | ErrorKind::InappropriateMatching
            | ErrorKind::ConstraintViolation
            | ErrorKind::TypeOrValueExists
            | ErrorKind::InvalidSyntax => ErrorCategory::Attribute,
            ErrorKind::NoSuchObject
            | ErrorKind::AliasProblem
            | ErrorKind::InvalidDNSyntax
            | ErrorKind::AliasDerefProblem => ErrorCategory::Name,
            ErrorKind::XProxyAuthzFailure
            | ErrorKind::InappropriateAuth
            | ErrorKind::InvalidCredentials
            | ErrorKind::InsufficientAccess => ErrorCategory::Security,
            ErrorKind::Busy
            | ErrorKind::Unavailable
            | ErrorKind::UnwillingToPerform
            | ErrorKind::LoopDetect => ErrorCategory::Service,
            ErrorKind::NamingViolation
            | ErrorKind::ObjectClassViolation
            | ErrorKind::NotAllowedOnNonleaf
            | ErrorKind::NotAllowedOnRDN
            | ErrorKind::AlreadyExists
            | ErrorKind::NoObjectClassMods
            | ErrorKind::ResultsTooLarge
            | ErrorKind::AffectsMultipleDSAs => ErrorCategory::Update,
            ErrorKind::ServerDown
            | ErrorKind::LocalError
            | ErrorKind::EncodingError
            | ErrorKind::DecodingError
            | ErrorKind::Timeout
            | ErrorKind::AuthUnknown
            | ErrorKind::FilterError
            | ErrorKind::UserCancelled
            | ErrorKind::ParamError
            | ErrorKind::NoMemory
            | ErrorKind::ConnectError
            | ErrorKind::NotSupported
            | ErrorKind::ControlNotFound
            | ErrorKind::NoResultsReturned
            | ErrorKind::ClientLoop
            | ErrorKind::ReferralLimitExceeded
            | ErrorKind::XConnecting => ErrorCategory::Api,
            ErrorKind::Unspecified(_) => ErrorCategory::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn test_category_assignment() {
        assert_eq!(ErrorKind::NoSuchObject.category(), ErrorCategory::Name);
        assert_eq!(
            ErrorKind::InvalidCredentials.category(),
            ErrorCategory::Security
        );
        assert_eq!(ErrorKind::Busy.category(), ErrorCategory::Service);
        assert_eq!(ErrorKind::ServerDown.category(), ErrorCategory::Api);
        assert_eq!(
            ErrorKind::OperationsError.category(),
            ErrorCategory::Uncategorized
        );
        assert_eq!(
            ErrorKind::Unspecified(ResultCode::from(9999)).category(),
            ErrorCategory::Unspecified
        );
    }

    #[test]
    fn test_every_kind_in_exactly_one_category_index() {
        let mut seen = BTreeSet::new();
        for category in ErrorCategory::iter() {
            for kind in category.kinds() {
                assert_eq!(kind.category(), category);
                assert!(
                    seen.insert(format!("{kind:?}")),
                    "{kind:?} indexed under more than one category"
                );
            }
        }
        // Every registered kind shows up in the index.
        let registered = ErrorKind::iter()
            .filter(|kind| !matches!(kind, ErrorKind::Unspecified(_)))
            .count();
        assert_eq!(seen.len(), registered);
    }

    #[test]
    fn test_unspecified_category_has_no_registered_kinds() {
        assert_eq!(ErrorCategory::Unspecified.kinds().count(), 0);
    }

    #[test]
    fn test_display_uses_standard_wording() {
        assert_eq!(ErrorKind::NoSuchObject.to_string(), "No such object");
        assert_eq!(
            ErrorKind::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            ErrorKind::Unspecified(ResultCode::from(9999)).to_string(),
            "Unspecified result code 9999"
        );
    }

    #[test]
    fn test_unspecified_keeps_the_raw_code() {
        let kind = ErrorKind::Unspecified(ResultCode::from(9999));
        assert_eq!(kind.code().raw(), 9999);
    }
}
