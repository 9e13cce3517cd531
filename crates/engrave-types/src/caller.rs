use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque submitter principal.
///
/// The surrounding execution environment authenticates callers; engrave
/// only ever compares principals for equality when the access policy
/// decides whether a caller is privileged. A `CallerId` is a non-empty
/// label with no structure imposed by this crate (an address, a key
/// fingerprint, a service account name).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    /// Create a caller principal. Fails on an empty label.
    pub fn new(label: impl Into<String>) -> Result<Self, TypeError> {
        let label = label.into();
        if label.is_empty() {
            return Err(TypeError::EmptyCaller);
        }
        Ok(Self(label))
    }

    /// The raw label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallerId({})", self.0)
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty() {
        let caller = CallerId::new("owner").unwrap();
        assert_eq!(caller.as_str(), "owner");
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(CallerId::new(""), Err(TypeError::EmptyCaller)));
    }

    #[test]
    fn equality_is_by_label() {
        let a = CallerId::new("alice").unwrap();
        let b = CallerId::new("alice").unwrap();
        let c = CallerId::new("bob").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serde_is_transparent() {
        let caller = CallerId::new("owner").unwrap();
        let json = serde_json::to_string(&caller).unwrap();
        assert_eq!(json, "\"owner\"");
        let back: CallerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, caller);
    }
}
