use crate::auth::use_auth;
use crate::permission::with_permission;
use dioxus::prelude::*;
use shared_types::{expert_menu, AccessRequirement, UserRole};
use shared_ui::PageHeader;

fn expert_label(menu_id: &str) -> String {
    expert_menu()
        .iter()
        .find_map(|node| node.find(menu_id))
        .map(|node| node.label.clone())
        .unwrap_or_default()
}

/// Expert pages are open to experts only; the expert tree carries no levels
/// of its own.
fn expert_page(menu_id: &'static str, description: &'static str, body: Element) -> Element {
    with_permission(AccessRequirement::MinLevel(UserRole::Expert), move || {
        rsx! {
            document::Link { rel: "stylesheet", href: asset!("./sections.css") }
            div { class: "section-page",
                PageHeader { title: expert_label(menu_id), description: description.to_string() }
                div { class: "section-body", {body} }
            }
        }
    })
}

#[component]
pub fn ExpertDashboard() -> Element {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    expert_page(
        "expert-dashboard",
        "Today's sessions and requests.",
        rsx! {
            p { class: "section-lead", "Welcome back, {name}." }
        },
    )
}

#[component]
pub fn ExpertSchedule() -> Element {
    expert_page(
        "expert-schedule",
        "Your available counseling slots.",
        rsx! { p { class: "section-empty", "No slots published yet." } },
    )
}

#[component]
pub fn CounselingSessions() -> Element {
    expert_page(
        "expert-counseling-sessions",
        "Upcoming and ongoing sessions.",
        rsx! { p { class: "section-empty", "No sessions scheduled." } },
    )
}

#[component]
pub fn CounselingRecords() -> Element {
    expert_page(
        "expert-counseling-records",
        "Notes from completed sessions.",
        rsx! { p { class: "section-empty", "No records yet." } },
    )
}

#[component]
pub fn ExpertProfile() -> Element {
    expert_page(
        "expert-profile",
        "How members see you.",
        rsx! { p { class: "section-empty", "Profile details will appear here." } },
    )
}
