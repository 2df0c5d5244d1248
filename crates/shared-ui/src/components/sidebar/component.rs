use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is open. On narrow viewports the sidebar overlays the
/// page and closes after a leaf entry is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The sidebar container. Shows a backdrop while open on small screens.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let mut merged = with_class("sidebar", attributes);
    merged.push(Attribute::new(
        "data-state",
        if is_open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            "aria-label": "Main navigation",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Scrollable middle section holding the menu.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-content", attributes);
    rsx! {
        nav { ..merged, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarGroup(label: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            if let Some(label) = label {
                div { class: "sidebar-group-label", "{label}" }
            }
            {children}
        }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

/// Top-level menu list.
#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-menu", attributes);
    rsx! {
        ul { role: "tree", ..merged, {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-menu-item", attributes);
    rsx! {
        li { role: "treeitem", ..merged, {children} }
    }
}

/// Clickable row for a menu entry.
///
/// Section headers pass `expanded` and toggle their sub-menu in `onclick`.
/// Leaf entries leave `expanded` unset and close the overlay sidebar when
/// clicked.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] expanded: Option<bool>,
    #[props(default)] depth: usize,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_section = expanded.is_some();
    let indent = format!("--sidebar-depth: {depth}");

    rsx! {
        button {
            r#type: "button",
            class: if depth == 0 { "sidebar-menu-button" } else { "sidebar-menu-sub-button" },
            style: "{indent}",
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            "aria-expanded": expanded.map(|open| if open { "true" } else { "false" }),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
                if !is_section {
                    state.set(SidebarState { open: false });
                }
            },
            {children}
            if let Some(open) = expanded {
                SidebarMenuChevron { open }
            }
        }
    }
}

/// Rotating chevron shown on section headers.
#[component]
pub fn SidebarMenuChevron(open: bool) -> Element {
    rsx! {
        span {
            class: "sidebar-menu-chevron",
            "data-state": if open { "open" } else { "closed" },
            "aria-hidden": "true",
            "\u{203A}"
        }
    }
}

/// Count or short label at the end of a menu row.
#[component]
pub fn SidebarMenuBadge(label: String) -> Element {
    rsx! {
        span { class: "sidebar-menu-badge", "{label}" }
    }
}

/// Nested list under a section header. Rendered collapsed when `open` is false
/// so expansion state survives without remounting children.
#[component]
pub fn SidebarMenuSub(open: bool, children: Element) -> Element {
    rsx! {
        ul {
            class: "sidebar-menu-sub",
            role: "group",
            "data-state": if open { "open" } else { "closed" },
            hidden: !open,
            {children}
        }
    }
}

// ─── Utility ───────────────────────────────────────────────────────────

/// Button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// Main content area next to the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-inset", attributes);
    rsx! {
        main { ..merged, {children} }
    }
}
