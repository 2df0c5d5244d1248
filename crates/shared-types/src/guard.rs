use serde::{Deserialize, Serialize};

use crate::role::UserRole;

/// What a page or UI fragment requires of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessRequirement {
    /// At least this level in the role hierarchy.
    MinLevel(UserRole),
    /// Only `SuperAdmin`, stricter than `MinLevel(SuperAdmin)` in intent.
    SuperAdminOnly,
}

impl AccessRequirement {
    pub fn is_satisfied_by(&self, role: &UserRole) -> bool {
        match self {
            AccessRequirement::MinLevel(min) => role.has_min_level(min),
            AccessRequirement::SuperAdminOnly => role.is_super_admin(),
        }
    }
}

/// Session as seen by a guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The current user is still being fetched.
    Loading,
    Anonymous,
    Authenticated(UserRole),
}

/// Result of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Denied,
    Granted,
}

/// Decide what a guard renders for `session`.
pub fn evaluate_access(session: &SessionState, requirement: &AccessRequirement) -> GuardOutcome {
    match session {
        SessionState::Loading => GuardOutcome::Loading,
        SessionState::Anonymous => GuardOutcome::Denied,
        SessionState::Authenticated(role) if requirement.is_satisfied_by(role) => {
            GuardOutcome::Granted
        }
        SessionState::Authenticated(_) => GuardOutcome::Denied,
    }
}
