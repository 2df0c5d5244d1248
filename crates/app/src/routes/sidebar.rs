use crate::icons::menu_icon;
use crate::nav::use_menu_expansion;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::MenuNode;
use shared_ui::{
    SidebarGroup, SidebarMenu, SidebarMenuBadge, SidebarMenuButton, SidebarMenuItem,
    SidebarMenuSub,
};

/// The role-filtered navigation tree. `trail` is the chain of ids leading to
/// the current page.
#[component]
pub fn SidebarNav(menu: Vec<MenuNode>, trail: Vec<String>) -> Element {
    rsx! {
        SidebarGroup {
            SidebarMenu {
                for node in menu {
                    MenuEntry {
                        key: "{node.id}",
                        node: node.clone(),
                        depth: 0,
                        trail: trail.clone(),
                    }
                }
            }
        }
    }
}

fn navigate_to(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(_) => tracing::warn!(path, "menu entry does not match a route"),
    }
}

#[component]
fn MenuEntry(node: MenuNode, depth: usize, trail: Vec<String>) -> Element {
    let mut expansion = use_menu_expansion();
    let badge = node.badge.as_ref().map(|badge| badge.label());

    if !node.has_children() {
        let active = trail.last() == Some(&node.id);
        let path = node.path.clone();
        return rsx! {
            SidebarMenuItem {
                SidebarMenuButton {
                    active,
                    depth,
                    onclick: move |_| navigate_to(&path),
                    {menu_icon(&node.icon)}
                    span { class: "sidebar-menu-label", "{node.label}" }
                    if let Some(label) = badge {
                        SidebarMenuBadge { label }
                    }
                }
            }
        };
    }

    let open = expansion.is_expanded(&node.id);
    let on_trail = trail.contains(&node.id);
    let id = node.id.clone();

    rsx! {
        SidebarMenuItem {
            SidebarMenuButton {
                active: on_trail && !open,
                expanded: open,
                depth,
                onclick: move |_| expansion.toggle(&id),
                {menu_icon(&node.icon)}
                span { class: "sidebar-menu-label", "{node.label}" }
                if let Some(label) = badge {
                    SidebarMenuBadge { label }
                }
            }
            SidebarMenuSub { open,
                for child in node.children.iter() {
                    MenuEntry {
                        key: "{child.id}",
                        node: child.clone(),
                        depth: depth + 1,
                        trail: trail.clone(),
                    }
                }
            }
        }
    }
}
