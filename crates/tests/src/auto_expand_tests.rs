use pretty_assertions::assert_eq;
use shared_types::{
    admin_menu, expert_menu, resolve_menu_id, AutoExpand, ExpandedMenus, PendingExpand,
    AUTO_EXPAND_DELAY, MENU_PATH_PREFIXES,
};
use std::sync::{Arc, Mutex};

/// Expansion state shared with the delayed tasks, as the sidebar holds it.
#[derive(Clone, Default)]
struct Sidebar {
    auto: Arc<Mutex<AutoExpand>>,
    expanded: Arc<Mutex<ExpandedMenus>>,
}

impl Sidebar {
    /// A sidebar first rendered on `path`.
    fn mounted_at(path: &str) -> Self {
        let sidebar = Self::default();
        let hydrated = sidebar
            .auto
            .lock()
            .unwrap()
            .hydrate(path, &mut sidebar.expanded.lock().unwrap());
        assert!(hydrated);
        sidebar
    }

    fn navigate(&self, path: &str) -> Option<tokio::task::JoinHandle<bool>> {
        let pending = self.auto.lock().unwrap().schedule(path)?;
        let sidebar = self.clone();
        Some(tokio::spawn(async move {
            tokio::time::sleep(AUTO_EXPAND_DELAY).await;
            sidebar.settle(&pending)
        }))
    }

    fn settle(&self, pending: &PendingExpand) -> bool {
        let auto = self.auto.lock().unwrap();
        let mut expanded = self.expanded.lock().unwrap();
        auto.apply(pending, &mut expanded)
    }

    fn open_ids(&self) -> Vec<String> {
        self.expanded.lock().unwrap().iter().map(str::to_string).collect()
    }
}

#[tokio::test]
async fn navigating_to_expert_list_opens_experts_after_delay() {
    let sidebar = Sidebar::mounted_at("/admin/dashboard");

    let task = sidebar.navigate("/admin/experts/list").expect("section path");
    assert!(!sidebar.expanded.lock().unwrap().is_expanded("experts"));

    assert!(task.await.unwrap());
    assert!(sidebar.expanded.lock().unwrap().is_expanded("experts"));
}

#[tokio::test]
async fn newer_navigation_supersedes_pending_expand() {
    let sidebar = Sidebar::mounted_at("/admin/dashboard");

    let first = sidebar.navigate("/admin/experts/list").expect("experts");
    let second = sidebar.navigate("/admin/payments/history").expect("payments");

    assert!(!first.await.unwrap());
    assert!(second.await.unwrap());
    assert_eq!(sidebar.open_ids(), vec!["payments".to_string()]);
}

#[tokio::test]
async fn leaving_for_an_unsectioned_page_cancels_pending_expand() {
    let sidebar = Sidebar::mounted_at("/admin/dashboard");

    let pending = sidebar.navigate("/admin/surveys/logic").expect("surveys");
    assert!(sidebar.navigate("/admin/users").is_none());

    assert!(!pending.await.unwrap());
    assert!(sidebar.expanded.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sections_opened_by_hand_stay_open() {
    let sidebar = Sidebar::mounted_at("/admin/dashboard");
    sidebar.expanded.lock().unwrap().expand("system");

    let task = sidebar.navigate("/admin/centers/list").expect("centers");
    assert!(task.await.unwrap());

    assert_eq!(
        sidebar.open_ids(),
        vec!["centers".to_string(), "system".to_string()]
    );
}

#[tokio::test]
async fn already_open_section_is_left_alone() {
    let sidebar = Sidebar::mounted_at("/admin/dashboard");
    sidebar.expanded.lock().unwrap().expand("experts");

    let task = sidebar.navigate("/admin/experts/applications").expect("experts");

    assert!(!task.await.unwrap());
    assert_eq!(sidebar.open_ids(), vec!["experts".to_string()]);
}

#[tokio::test]
async fn navigation_before_first_render_is_ignored() {
    let sidebar = Sidebar::default();

    assert!(sidebar.navigate("/admin/experts/list").is_none());
    assert!(sidebar.expanded.lock().unwrap().is_empty());
}

#[tokio::test]
async fn first_render_opens_its_section_without_delay() {
    let sidebar = Sidebar::mounted_at("/expert/counseling/sessions");
    assert_eq!(sidebar.open_ids(), vec!["expert-counseling".to_string()]);

    let task = sidebar.navigate("/admin/surveys/list").expect("surveys");
    assert!(task.await.unwrap());
    assert_eq!(
        sidebar.open_ids(),
        vec!["expert-counseling".to_string(), "surveys".to_string()]
    );
}

#[test]
fn every_prefix_targets_a_collapsible_section() {
    let admin = admin_menu();
    let expert = expert_menu();
    for (prefix, id) in MENU_PATH_PREFIXES {
        let node = admin
            .iter()
            .chain(expert.iter())
            .find_map(|n| n.find(id))
            .unwrap_or_else(|| panic!("{id} is not in any menu"));
        assert!(node.has_children(), "{id} has no children to reveal");
        assert_eq!(resolve_menu_id(prefix), Some(*id));
    }
}

#[test]
fn lookalike_paths_do_not_resolve() {
    assert_eq!(resolve_menu_id("/admin/centersfoo"), None);
    assert_eq!(resolve_menu_id("/admin"), None);
    assert_eq!(resolve_menu_id(""), None);
    assert_eq!(resolve_menu_id("/expert/counseling"), Some("expert-counseling"));
}
