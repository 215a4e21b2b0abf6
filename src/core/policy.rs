//! Owner policy: who may withdraw.

/// Compares candidate addresses against the single configured owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerPolicy {
    owner: String,
}

impl OwnerPolicy {
    pub fn new(owner: impl AsRef<str>) -> Self {
        Self { owner: owner.as_ref().to_lowercase() }
    }

    /// True iff `candidate` is present and equals the owner, ignoring case.
    pub fn is_authorized(&self, candidate: Option<&str>) -> bool {
        match candidate {
            Some(address) => address.to_lowercase() == self.owner,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "0xAbC0000000000000000000000000000000dEf123";

    #[test]
    fn test_case_insensitive_match() {
        let policy = OwnerPolicy::new(OWNER);
        assert!(policy.is_authorized(Some(OWNER)));
        assert!(policy.is_authorized(Some(&OWNER.to_lowercase())));
        assert!(policy.is_authorized(Some(&OWNER.to_uppercase().replacen("0X", "0x", 1))));
    }

    #[test]
    fn test_absent_identity_is_unauthorized() {
        assert!(!OwnerPolicy::new(OWNER).is_authorized(None));
    }

    #[test]
    fn test_other_address_rejected() {
        let policy = OwnerPolicy::new(OWNER);
        assert!(!policy.is_authorized(Some("0x0000000000000000000000000000000000000001")));
        assert!(!policy.is_authorized(Some("")));
    }

    #[test]
    fn test_case_variants_agree() {
        let policy = OwnerPolicy::new(OWNER);
        let variants = [OWNER.to_string(), OWNER.to_lowercase(), OWNER.to_ascii_uppercase()];
        let first = policy.is_authorized(Some(&variants[0]));
        for v in &variants {
            assert_eq!(policy.is_authorized(Some(v)), first);
        }
    }
}
