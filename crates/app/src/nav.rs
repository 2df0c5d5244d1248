use dioxus::prelude::*;
use shared_types::{AutoExpand, ExpandedMenus, AUTO_EXPAND_DELAY};
use std::time::Duration;

/// Sidebar expansion state shared by the layout and the menu entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuExpansion {
    pub expanded: Signal<ExpandedMenus>,
    pub hydrated: Signal<bool>,
    auto: Signal<AutoExpand>,
}

impl MenuExpansion {
    pub fn new() -> Self {
        Self {
            expanded: Signal::new(ExpandedMenus::new()),
            hydrated: Signal::new(false),
            auto: Signal::new(AutoExpand::new()),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.read().is_expanded(id)
    }

    pub fn toggle(&mut self, id: &str) {
        self.expanded.write().toggle(id);
    }

    /// Open the section for the first route synchronously and mark the state
    /// ready for route-driven expansion.
    pub fn hydrate(&mut self, initial_path: &str) {
        if self
            .auto
            .write()
            .hydrate(initial_path, &mut self.expanded.write())
        {
            self.hydrated.set(true);
        }
    }
}

pub fn use_menu_expansion() -> MenuExpansion {
    use_context::<MenuExpansion>()
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Open the menu section that owns `path` shortly after each navigation.
///
/// Waits for hydration, then applies the expansion after `AUTO_EXPAND_DELAY`
/// unless a newer navigation has happened in the meantime. Sections the user
/// opened stay open.
pub fn use_route_auto_expand(path: String) {
    let expansion = use_menu_expansion();

    use_effect(use_reactive((&path,), move |(path,)| {
        // Subscribes the effect so it reruns once hydration lands
        let _ = (expansion.hydrated)();
        let mut auto = expansion.auto;
        let Some(pending) = auto.write().schedule(&path) else {
            return;
        };
        let mut expanded = expansion.expanded;
        spawn(async move {
            sleep(AUTO_EXPAND_DELAY).await;
            if auto.peek().apply(&pending, &mut expanded.write()) {
                tracing::debug!(menu_id = pending.menu_id, "auto-expanded menu section");
            }
        });
    }));
}
