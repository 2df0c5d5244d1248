use dioxus::prelude::*;

/// Title bar at the top of a page with an optional description and actions.
#[component]
pub fn PageHeader(
    title: String,
    description: Option<String>,
    actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if let Some(description) = description {
                    p { class: "page-description", "{description}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}

/// Shown in place of a page the current user may not open.
#[component]
pub fn AccessDenied(
    #[props(default = "You do not have permission to view this page.".to_string())] message: String,
    required: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "access-denied", role: "alert",
            h2 { class: "access-denied-title", "Access denied" }
            p { class: "access-denied-message", "{message}" }
            if let Some(required) = required {
                p { class: "access-denied-required", "Required level: {required}" }
            }
        }
    }
}

/// Placeholder while session data loads.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading-state", "aria-busy": "true",
            p { "{label}" }
        }
    }
}
