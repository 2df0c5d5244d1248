use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

use crate::menu::path_matches;

/// Delay between a route change and the matching section opening.
pub const AUTO_EXPAND_DELAY: Duration = Duration::from_millis(100);

/// Path prefixes that belong to a collapsible menu section.
pub const MENU_PATH_PREFIXES: &[(&str, &str)] = &[
    ("/admin/centers", "centers"),
    ("/admin/experts", "experts"),
    ("/admin/payments", "payments"),
    ("/admin/surveys", "surveys"),
    ("/admin/notifications", "notifications"),
    ("/admin/system", "system"),
    ("/expert/counseling", "expert-counseling"),
];

/// Map a route path to the section that should be open for it.
/// The longest matching prefix wins; matches stop at `/` boundaries.
pub fn resolve_menu_id(path: &str) -> Option<&'static str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    MENU_PATH_PREFIXES
        .iter()
        .filter(|(prefix, _)| path_matches(path, prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, id)| *id)
}

/// Set of menu sections currently open in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedMenus {
    ids: BTreeSet<String>,
}

impl ExpandedMenus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Open a section. Returns false if it was already open.
    pub fn expand(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn collapse(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip a section and return its new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.collapse(id) {
            false
        } else {
            self.expand(id)
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// An expansion waiting for its debounce delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExpand {
    pub generation: u64,
    pub menu_id: &'static str,
}

/// Bookkeeping for route-driven expansion.
///
/// Nothing is scheduled until [`AutoExpand::hydrate`] has opened the section
/// for the first route. After that every navigation bumps the generation, so
/// a timer scheduled for an earlier navigation finds its `PendingExpand`
/// stale and does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoExpand {
    generation: u64,
    hydrated: bool,
}

impl AutoExpand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Open the section owning `initial_path` right away and start accepting
    /// navigations. Returns false if already hydrated.
    pub fn hydrate(&mut self, initial_path: &str, expanded: &mut ExpandedMenus) -> bool {
        if self.hydrated {
            return false;
        }
        if let Some(id) = resolve_menu_id(initial_path) {
            expanded.expand(id);
        }
        self.hydrated = true;
        true
    }

    /// Record a navigation to `path`. Returns the expansion to apply once the
    /// delay elapses, or `None` before hydration or when the path belongs to
    /// no section.
    pub fn schedule(&mut self, path: &str) -> Option<PendingExpand> {
        if !self.hydrated {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        resolve_menu_id(path).map(|menu_id| PendingExpand {
            generation: self.generation,
            menu_id,
        })
    }

    pub fn is_current(&self, pending: &PendingExpand) -> bool {
        pending.generation == self.generation
    }

    /// Apply a pending expansion. Returns true only if a section was opened;
    /// stale or already-open targets leave `expanded` unchanged.
    pub fn apply(&self, pending: &PendingExpand, expanded: &mut ExpandedMenus) -> bool {
        if !self.is_current(pending) {
            tracing::debug!(menu_id = pending.menu_id, "skipping superseded auto-expand");
            return false;
        }
        expanded.expand(pending.menu_id)
    }
}
