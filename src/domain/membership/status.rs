//! Membership status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a membership.
///
/// Only `Active` members may create discounted bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Cancelled,
}

impl MembershipStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, MembershipStatus::Active)
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipStatus::Active => write!(f, "active"),
            MembershipStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MembershipStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&MembershipStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn only_active_grants_access() {
        assert!(MembershipStatus::Active.is_active());
        assert!(!MembershipStatus::Cancelled.is_active());
    }
}
