use crate::auth::use_user_role;
use crate::permission::{with_permission, PermissionGuard};
use dioxus::prelude::*;
use shared_types::{admin_menu, AccessRequirement, UserRole, ALL_ROLES};
use shared_ui::{Badge, BadgeVariant, PageHeader};

/// Page access mirrors the minimum level of the matching menu entry, so a
/// hidden menu item is also a closed page.
fn menu_requirement(menu_id: &str) -> AccessRequirement {
    let min_level = admin_menu()
        .iter()
        .find_map(|node| node.find(menu_id))
        .and_then(|node| node.min_level.clone());
    match min_level {
        Some(UserRole::SuperAdmin) => AccessRequirement::SuperAdminOnly,
        Some(role) => AccessRequirement::MinLevel(role),
        None => AccessRequirement::MinLevel(UserRole::Staff),
    }
}

fn menu_label(menu_id: &str) -> String {
    admin_menu()
        .iter()
        .find_map(|node| node.find(menu_id))
        .map(|node| node.label.clone())
        .unwrap_or_default()
}

#[component]
fn SectionPage(menu_id: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sections.css") }
        div { class: "section-page",
            PageHeader { title: menu_label(menu_id), description: description.to_string() }
            div { class: "section-body", {children} }
        }
    }
}

fn admin_section(menu_id: &'static str, description: &'static str) -> Element {
    with_permission(menu_requirement(menu_id), move || {
        rsx! {
            SectionPage { menu_id, description,
                p { class: "section-empty", "Nothing to show yet." }
            }
        }
    })
}

#[component]
pub fn AdminDashboard() -> Element {
    let role = use_user_role().unwrap_or_default();
    with_permission(menu_requirement("dashboard"), move || {
        rsx! {
            SectionPage { menu_id: "dashboard", description: "Overview of centers, experts and payments.",
                p { class: "section-lead",
                    "Signed in as "
                    Badge { tone: role.permission_level_color().as_str().to_string(), "{role.admin_level_text()}" }
                }
            }
        }
    })
}

#[component]
pub fn CenterList() -> Element {
    admin_section("centers-list", "Registered counseling centers and their managers.")
}

#[component]
pub fn CenterCreate() -> Element {
    admin_section("centers-create", "Register a new counseling center.")
}

#[component]
pub fn ExpertList() -> Element {
    admin_section("experts-list", "Experts working across your centers.")
}

#[component]
pub fn ExpertApplications() -> Element {
    admin_section("experts-applications", "Pending expert applications awaiting review.")
}

#[component]
pub fn UserList() -> Element {
    admin_section("users", "Member accounts and their status.")
}

#[component]
pub fn PaymentHistory() -> Element {
    admin_section("payments-history", "Payments received for counseling sessions.")
}

#[component]
pub fn PaymentSettlements() -> Element {
    admin_section("payments-settlements", "Settlements paid out to centers and experts.")
}

#[component]
pub fn SurveyList() -> Element {
    admin_section("surveys-list", "Intake and follow-up surveys.")
}

#[component]
pub fn SurveyLogic() -> Element {
    admin_section("surveys-logic", "Question branching rules for surveys.")
}

#[component]
pub fn NotificationHistory() -> Element {
    admin_section("notifications-history", "Notifications sent to members and experts.")
}

#[component]
pub fn SystemSettings() -> Element {
    admin_section("system-settings", "Platform-wide settings.")
}

#[component]
pub fn SuperAdminConsole() -> Element {
    admin_section("super-admin", "Operations reserved for super administrators.")
}

const TEMPLATES: &[(&str, &str)] = &[
    ("session-reminder", "Session reminder"),
    ("session-cancelled", "Session cancelled"),
    ("payment-receipt", "Payment receipt"),
    ("survey-invite", "Survey invitation"),
];

/// Notification templates. Anyone with section access can browse; deleting
/// needs a regional manager or above.
#[component]
pub fn NotificationTemplates() -> Element {
    let templates = use_signal(|| TEMPLATES.to_vec());

    with_permission(menu_requirement("notifications-templates"), move || {
        rsx! {
            SectionPage {
                menu_id: "notifications-templates",
                description: "Message templates used for member and expert notifications.",
                ul { class: "template-list",
                    for (key, name) in templates() {
                        li { key: "{key}", class: "template-row",
                            span { class: "template-name", "{name}" }
                            code { class: "template-key", "{key}" }
                            PermissionGuard {
                                requirement: AccessRequirement::MinLevel(UserRole::RegionalManager),
                                button {
                                    r#type: "button",
                                    class: "template-delete",
                                    onclick: move |_| {
                                        let mut templates = templates;
                                        templates.write().retain(|(k, _)| *k != key);
                                        tracing::info!(template = key, "notification template deleted");
                                    },
                                    "Delete template"
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Role hierarchy reference. Super admin only.
#[component]
pub fn SystemPermissions() -> Element {
    with_permission(menu_requirement("system-permissions"), || {
        rsx! {
            SectionPage {
                menu_id: "system-permissions",
                description: "Roles from most to least senior.",
                table { class: "role-table",
                    thead {
                        tr {
                            th { "Role" }
                            th { "Level" }
                            th { "Rank" }
                        }
                    }
                    tbody {
                        for role in ALL_ROLES.iter() {
                            tr { key: "{role}",
                                td { code { "{role}" } }
                                td {
                                    Badge { tone: role.permission_level_color().as_str().to_string(), "{role.admin_level_text()}" }
                                }
                                td {
                                    {match role.rank() {
                                        Some(rank) => rsx! { "{rank}" },
                                        None => rsx! {
                                            Badge { variant: BadgeVariant::Outline, "unranked" }
                                        },
                                    }}
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
