use engrave_types::CallerId;

/// The privileged-caller predicate.
///
/// The surrounding access-control layer injects an implementation when the
/// store is constructed; every mutating operation consults it before
/// touching state. The store never learns anything about the caller beyond
/// this yes/no answer.
pub trait AccessPolicy: Send + Sync {
    fn is_privileged(&self, caller: &CallerId) -> bool;
}

/// Exactly one privileged principal; everyone else is rejected.
#[derive(Clone, Debug)]
pub struct SingleOwner {
    owner: CallerId,
}

impl SingleOwner {
    pub fn new(owner: CallerId) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &CallerId {
        &self.owner
    }
}

impl AccessPolicy for SingleOwner {
    fn is_privileged(&self, caller: &CallerId) -> bool {
        caller == &self.owner
    }
}

/// Every caller is privileged. For tests and single-user embedding.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn is_privileged(&self, _caller: &CallerId) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(label: &str) -> CallerId {
        CallerId::new(label).unwrap()
    }

    #[test]
    fn single_owner_accepts_only_owner() {
        let policy = SingleOwner::new(caller("owner"));
        assert!(policy.is_privileged(&caller("owner")));
        assert!(!policy.is_privileged(&caller("stranger")));
    }

    #[test]
    fn allow_all_accepts_anyone() {
        let policy = AllowAll;
        assert!(policy.is_privileged(&caller("anyone")));
    }
}
