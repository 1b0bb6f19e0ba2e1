use crate::codes::ResultCode;
use crate::kind::ErrorKind;
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

// Built once, on first lookup. Two kinds declaring the same code is a
// programming error and must abort the build of the registry instead of one
// kind silently shadowing the other.
static REGISTRY: LazyLock<HashMap<i32, ErrorKind>> = LazyLock::new(|| {
    let mut registry = HashMap::new();
    for kind in ErrorKind::iter() {
        if matches!(kind, ErrorKind::Unspecified(_)) {
            continue;
        }
        let code = kind.code().raw();
        if let Some(previous) = registry.insert(code, kind) {
            panic!("result code {code} is declared by both {previous:?} and {kind:?}");
        }
    }
    registry
});

/// Resolve a result code to its registered [`ErrorKind`].
///
/// Total: codes outside the known domain come back as
/// [`ErrorKind::Unspecified`] with the raw code preserved.
pub fn classify(code: ResultCode) -> ErrorKind {
    REGISTRY
        .get(&code.raw())
        .copied()
        .unwrap_or(ErrorKind::Unspecified(code))
}
