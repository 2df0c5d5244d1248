use pretty_assertions::assert_eq;
use shared_types::{
    admin_level_text, evaluate_access, has_min_permission_level, is_admin,
    permission_level_color, AccessRequirement, GuardOutcome, LevelColor, SessionState, UserRole,
    ALL_ROLES,
};

#[test]
fn staff_and_center_manager_comparison() {
    assert!(!has_min_permission_level(&UserRole::Staff, &UserRole::CenterManager));
    assert!(has_min_permission_level(&UserRole::CenterManager, &UserRole::Staff));
}

#[test]
fn delete_template_button_needs_regional_manager() {
    let requirement = AccessRequirement::MinLevel(UserRole::RegionalManager);
    let outcomes: Vec<(UserRole, GuardOutcome)> = ALL_ROLES
        .iter()
        .map(|role| {
            let session = SessionState::Authenticated(role.clone());
            (role.clone(), evaluate_access(&session, &requirement))
        })
        .collect();

    assert_eq!(
        outcomes,
        vec![
            (UserRole::SuperAdmin, GuardOutcome::Granted),
            (UserRole::RegionalManager, GuardOutcome::Granted),
            (UserRole::CenterManager, GuardOutcome::Denied),
            (UserRole::Staff, GuardOutcome::Denied),
            (UserRole::Expert, GuardOutcome::Denied),
            (UserRole::General, GuardOutcome::Denied),
        ]
    );
}

#[test]
fn guard_waits_for_session_and_denies_anonymous() {
    let requirement = AccessRequirement::MinLevel(UserRole::Staff);
    assert_eq!(
        evaluate_access(&SessionState::Loading, &requirement),
        GuardOutcome::Loading
    );
    assert_eq!(
        evaluate_access(&SessionState::Anonymous, &requirement),
        GuardOutcome::Denied
    );
}

#[test]
fn super_admin_only_pages() {
    let requirement = AccessRequirement::SuperAdminOnly;
    for role in ALL_ROLES {
        let expected = if *role == UserRole::SuperAdmin {
            GuardOutcome::Granted
        } else {
            GuardOutcome::Denied
        };
        let session = SessionState::Authenticated(role.clone());
        assert_eq!(evaluate_access(&session, &requirement), expected, "{role}");
    }
}

#[test]
fn unknown_role_is_denied_everywhere() {
    let session = SessionState::Authenticated(UserRole::parse("auditor"));
    for min in ALL_ROLES {
        assert_eq!(
            evaluate_access(&session, &AccessRequirement::MinLevel(min.clone())),
            GuardOutcome::Denied
        );
    }
    assert!(!is_admin(&UserRole::Unknown));
    assert_eq!(admin_level_text(&UserRole::Unknown), "User");
    assert_eq!(permission_level_color(&UserRole::Unknown), LevelColor::Gray);
}

#[test]
fn level_labels_for_header_badge() {
    let labels: Vec<(&str, &str)> = ALL_ROLES
        .iter()
        .map(|role| (admin_level_text(role), permission_level_color(role).as_str()))
        .collect();
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[0], ("Super Admin", "red"));
    assert!(labels.iter().all(|(text, _)| !text.is_empty()));
}
