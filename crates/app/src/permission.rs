use crate::auth::use_session_state;
use dioxus::prelude::*;
use shared_types::{evaluate_access, AccessRequirement, GuardOutcome, UserRole};
use shared_ui::{AccessDenied, LoadingState};

/// Evaluate `requirement` against the current session.
pub fn use_access(requirement: &AccessRequirement) -> GuardOutcome {
    evaluate_access(&use_session_state(), requirement)
}

/// True when the signed-in user is at least `min`.
pub fn use_has_min_level(min: UserRole) -> bool {
    use_access(&AccessRequirement::MinLevel(min)) == GuardOutcome::Granted
}

fn requirement_label(requirement: &AccessRequirement) -> String {
    match requirement {
        AccessRequirement::MinLevel(role) => format!("{} or above", role.admin_level_text()),
        AccessRequirement::SuperAdminOnly => UserRole::SuperAdmin.admin_level_text().to_string(),
    }
}

/// Render a fragment only for users meeting `requirement`; otherwise render
/// `fallback` (nothing by default). Used for button-level gating.
#[component]
pub fn PermissionGuard(
    requirement: AccessRequirement,
    fallback: Option<Element>,
    children: Element,
) -> Element {
    match use_access(&requirement) {
        GuardOutcome::Granted => rsx! { {children} },
        GuardOutcome::Loading | GuardOutcome::Denied => rsx! { {fallback} },
    }
}

/// Page-level gate: a loading state while the session resolves, an
/// access-denied panel when the requirement fails, the page otherwise.
#[component]
pub fn RequirePermission(requirement: AccessRequirement, children: Element) -> Element {
    match use_access(&requirement) {
        GuardOutcome::Granted => rsx! { {children} },
        GuardOutcome::Loading => rsx! { LoadingState {} },
        GuardOutcome::Denied => {
            tracing::info!(?requirement, "page access denied");
            rsx! {
                AccessDenied { required: requirement_label(&requirement) }
            }
        }
    }
}

/// Wrap a page so it renders only for users meeting `requirement`.
pub fn with_permission(requirement: AccessRequirement, page: impl FnOnce() -> Element) -> Element {
    rsx! {
        RequirePermission { requirement, {page()} }
    }
}
