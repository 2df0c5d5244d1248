//! Built-in navigation trees.

use crate::menu::MenuNode;
use crate::role::UserRole;

/// Navigation for the admin track, gated per node by `min_level`.
pub fn admin_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::new("dashboard", "Dashboard", "layout-dashboard", "/admin/dashboard")
            .min_level(UserRole::Staff),
        MenuNode::new("centers", "Center Management", "building", "")
            .min_level(UserRole::CenterManager)
            .children(vec![
                MenuNode::new("centers-list", "Centers", "list", "/admin/centers/list")
                    .min_level(UserRole::CenterManager),
                MenuNode::new("centers-create", "Register Center", "plus", "/admin/centers/new")
                    .min_level(UserRole::RegionalManager),
            ]),
        MenuNode::new("experts", "Expert Management", "user-check", "")
            .min_level(UserRole::Staff)
            .children(vec![
                MenuNode::new("experts-list", "Experts", "list", "/admin/experts/list")
                    .min_level(UserRole::Staff),
                MenuNode::new(
                    "experts-applications",
                    "Applications",
                    "file-text",
                    "/admin/experts/applications",
                )
                .min_level(UserRole::CenterManager),
            ]),
        MenuNode::new("users", "User Management", "users", "/admin/users")
            .min_level(UserRole::Staff),
        MenuNode::new("payments", "Payments", "credit-card", "")
            .min_level(UserRole::CenterManager)
            .children(vec![
                MenuNode::new("payments-history", "Payment History", "list", "/admin/payments/history")
                    .min_level(UserRole::CenterManager),
                MenuNode::new(
                    "payments-settlements",
                    "Settlements",
                    "wallet",
                    "/admin/payments/settlements",
                )
                .min_level(UserRole::RegionalManager),
            ]),
        MenuNode::new("surveys", "Surveys", "clipboard-list", "")
            .min_level(UserRole::Staff)
            .children(vec![
                MenuNode::new("surveys-list", "Survey List", "list", "/admin/surveys/list")
                    .min_level(UserRole::Staff),
                MenuNode::new("surveys-logic", "Branching Logic", "git-branch", "/admin/surveys/logic")
                    .min_level(UserRole::CenterManager),
            ]),
        MenuNode::new("notifications", "Notifications", "bell", "")
            .min_level(UserRole::Staff)
            .children(vec![
                MenuNode::new(
                    "notifications-templates",
                    "Templates",
                    "file-text",
                    "/admin/notifications/templates",
                )
                .min_level(UserRole::Staff),
                MenuNode::new(
                    "notifications-history",
                    "Send History",
                    "list",
                    "/admin/notifications/history",
                )
                .min_level(UserRole::Staff),
            ]),
        MenuNode::new("system", "System", "settings", "")
            .min_level(UserRole::RegionalManager)
            .children(vec![
                MenuNode::new("system-settings", "Settings", "settings", "/admin/system/settings")
                    .min_level(UserRole::RegionalManager),
                MenuNode::new(
                    "system-permissions",
                    "Permissions",
                    "key",
                    "/admin/system/permissions",
                )
                .min_level(UserRole::SuperAdmin),
            ]),
        MenuNode::new("super-admin", "Super Admin", "shield", "/admin/super-admin")
            .min_level(UserRole::SuperAdmin),
    ]
}

/// Navigation for experts. Not permissioned.
pub fn expert_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::new("expert-dashboard", "Dashboard", "layout-dashboard", "/expert/dashboard"),
        MenuNode::new("expert-schedule", "Schedule", "calendar", "/expert/schedule"),
        MenuNode::new("expert-counseling", "Counseling", "message-circle", "").children(vec![
            MenuNode::new(
                "expert-counseling-sessions",
                "Sessions",
                "list",
                "/expert/counseling/sessions",
            ),
            MenuNode::new(
                "expert-counseling-records",
                "Records",
                "file-text",
                "/expert/counseling/records",
            ),
        ]),
        MenuNode::new("expert-profile", "Profile", "user", "/expert/profile"),
    ]
}

/// Minimal menu shown to a super admin if filtering ever leaves nothing.
pub fn fallback_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::new("dashboard", "Dashboard", "layout-dashboard", "/admin/dashboard"),
        MenuNode::new("centers", "Center Management", "building", "/admin/centers/list"),
        MenuNode::new("system", "System", "settings", "/admin/system/settings"),
    ]
}
