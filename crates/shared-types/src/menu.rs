use serde::{Deserialize, Serialize};

use crate::menu_tree::{admin_menu, expert_menu, fallback_menu};
use crate::role::UserRole;

/// Count or short text rendered next to a menu label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MenuBadge {
    Count(u32),
    Text(String),
}

impl MenuBadge {
    pub fn label(&self) -> String {
        match self {
            MenuBadge::Count(n) => n.to_string(),
            MenuBadge::Text(s) => s.clone(),
        }
    }
}

/// A single entry in a navigation tree.
///
/// Visibility is gated by `min_level`. The three boolean flags predate
/// `min_level` and are still honored for trees loaded from JSON; none of the
/// built-in trees set them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<MenuBadge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<UserRole>,
    #[serde(default)]
    pub admin_only: bool,
    #[serde(default)]
    pub center_manager_only: bool,
    #[serde(default)]
    pub super_admin_only: bool,
}

impl MenuNode {
    pub fn new(id: &str, label: &str, icon: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            path: path.to_string(),
            ..Self::default()
        }
    }

    pub fn min_level(mut self, role: UserRole) -> Self {
        self.min_level = Some(role);
        self
    }

    pub fn badge(mut self, badge: MenuBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn has_legacy_flags(&self) -> bool {
        self.admin_only || self.center_manager_only || self.super_admin_only
    }

    /// True when the node carries no gate at all.
    pub fn is_public(&self) -> bool {
        self.min_level.is_none() && !self.has_legacy_flags()
    }

    /// Whether `role` may see this node on its own merits, ignoring children.
    pub fn is_visible_to(&self, role: &UserRole) -> bool {
        if self.is_public() {
            return true;
        }
        if let Some(min) = &self.min_level {
            if role.has_min_level(min) {
                return true;
            }
        }
        (self.admin_only && role.is_admin())
            || (self.center_manager_only && role.has_min_level(&UserRole::CenterManager))
            || (self.super_admin_only && role.is_super_admin())
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: &str) -> Option<&MenuNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// The two navigation trees a sidebar chooses between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTrees {
    pub admin: Vec<MenuNode>,
    pub expert: Vec<MenuNode>,
}

impl Default for MenuTrees {
    fn default() -> Self {
        Self {
            admin: admin_menu(),
            expert: expert_menu(),
        }
    }
}

fn filter_nodes(nodes: &[MenuNode], role: &UserRole) -> Vec<MenuNode> {
    let keep_all = role.is_super_admin();
    nodes
        .iter()
        .filter_map(|node| {
            let children = filter_nodes(&node.children, role);
            if keep_all || node.is_visible_to(role) || !children.is_empty() {
                Some(MenuNode {
                    children,
                    ..node.clone()
                })
            } else {
                None
            }
        })
        .collect()
}

/// Prune `tree` to the nodes `role` may see. Order is preserved and the input
/// is left untouched.
///
/// A parent that fails its own check is kept when any child survives, so
/// category entries stay navigable. `SuperAdmin` keeps everything and falls
/// back to a minimal menu if the result would be empty.
pub fn filter_menu(tree: &[MenuNode], role: &UserRole) -> Vec<MenuNode> {
    let filtered = filter_nodes(tree, role);
    if filtered.is_empty() && role.is_super_admin() {
        tracing::warn!("filtered admin menu is empty for super_admin, using fallback menu");
        return fallback_menu();
    }
    filtered
}

/// Select and filter the navigation tree for `role`.
///
/// Experts get their own fixed tree; every other role gets the admin tree
/// filtered by [`filter_menu`].
pub fn visible_menu(trees: &MenuTrees, role: &UserRole) -> Vec<MenuNode> {
    match role {
        UserRole::Expert => trees.expert.clone(),
        _ => filter_menu(&trees.admin, role),
    }
}

/// Find the deepest node whose path is a prefix of `path`, returning the chain
/// of ids from the root. Used to highlight the active entry and its parents.
pub fn active_trail(tree: &[MenuNode], path: &str) -> Vec<String> {
    fn walk(nodes: &[MenuNode], path: &str, trail: &mut Vec<String>) -> bool {
        for node in nodes {
            trail.push(node.id.clone());
            if walk(&node.children, path, trail) {
                return true;
            }
            if !node.path.is_empty() && path_matches(path, &node.path) {
                return true;
            }
            trail.pop();
        }
        false
    }
    let mut trail = Vec::new();
    walk(tree, path, &mut trail);
    trail
}

/// Prefix match on a `/` segment boundary.
pub(crate) fn path_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}
