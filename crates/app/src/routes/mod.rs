pub mod expert;
pub mod login;
pub mod not_found;
pub mod sections;
pub mod sidebar;

use crate::auth::{use_api, use_auth};
use crate::nav::{use_menu_expansion, use_route_auto_expand};
use dioxus::prelude::*;
use shared_types::{active_trail, visible_menu, MenuNode, MenuTrees, UserRole};
use shared_ui::{
    Badge, LoadingState, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use expert::{CounselingRecords, CounselingSessions, ExpertDashboard, ExpertProfile, ExpertSchedule};
use login::Login;
use not_found::NotFound;
use sections::{
    AdminDashboard, CenterCreate, CenterList, ExpertApplications, ExpertList,
    NotificationHistory, NotificationTemplates, PaymentHistory, PaymentSettlements,
    SuperAdminConsole, SurveyList, SurveyLogic, SystemPermissions, SystemSettings, UserList,
};
use sidebar::SidebarNav;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    // ── Admin ──
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/centers/list")]
    CenterList {},
    #[route("/admin/centers/new")]
    CenterCreate {},
    #[route("/admin/experts/list")]
    ExpertList {},
    #[route("/admin/experts/applications")]
    ExpertApplications {},
    #[route("/admin/users")]
    UserList {},
    #[route("/admin/payments/history")]
    PaymentHistory {},
    #[route("/admin/payments/settlements")]
    PaymentSettlements {},
    #[route("/admin/surveys/list")]
    SurveyList {},
    #[route("/admin/surveys/logic")]
    SurveyLogic {},
    #[route("/admin/notifications/templates")]
    NotificationTemplates {},
    #[route("/admin/notifications/history")]
    NotificationHistory {},
    #[route("/admin/system/settings")]
    SystemSettings {},
    #[route("/admin/system/permissions")]
    SystemPermissions {},
    #[route("/admin/super-admin")]
    SuperAdminConsole {},
    // ── Expert ──
    #[route("/expert/dashboard")]
    ExpertDashboard {},
    #[route("/expert/schedule")]
    ExpertSchedule {},
    #[route("/expert/counseling/sessions")]
    CounselingSessions {},
    #[route("/expert/counseling/records")]
    CounselingRecords {},
    #[route("/expert/profile")]
    ExpertProfile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing page for a role after sign-in.
    pub fn home_for(role: &UserRole) -> Self {
        match role {
            UserRole::Expert => Route::ExpertDashboard {},
            _ => Route::AdminDashboard {},
        }
    }
}

/// Auth guard layout. Resolves the current user once, then renders the
/// nested routes or sends the visitor to `/login`.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let here = use_route::<Route>().to_string();

    let resource = use_resource(move || {
        let api = api.clone();
        async move { api.current_user().await }
    });

    use_effect(move || {
        let outcome = resource.read().as_ref().cloned();
        let redirect = Some(here.clone()).filter(|path| path != "/");
        match outcome {
            Some(Ok(Some(user))) => auth.set_user(user),
            Some(Ok(None)) => {
                auth.clear_auth();
                navigator().replace(Route::Login { redirect });
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "current user lookup failed");
                auth.clear_auth();
                navigator().replace(Route::Login { redirect });
            }
            None => {}
        }
    });

    let ready = matches!(&*resource.read(), Some(Ok(Some(_))));
    if ready {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! {
            div { class: "auth-guard-loading",
                LoadingState {}
            }
        }
    }
}

/// Sends `/` to the landing page for the signed-in role.
#[component]
fn Home() -> Element {
    let auth = use_auth();

    use_effect(move || {
        if let Some(user) = auth.current_user.read().as_ref() {
            navigator().replace(Route::home_for(&user.user_type));
        }
    });

    rsx! { LoadingState {} }
}

/// Label of the deepest entry on the active trail.
fn page_title(menu: &[MenuNode], trail: &[String]) -> Option<String> {
    let id = trail.last()?;
    menu.iter().find_map(|node| node.find(id)).map(|node| node.label.clone())
}

/// Main app layout with the role-filtered sidebar and a header bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let mut auth = use_auth();
    let api = use_api();
    let mut expansion = use_menu_expansion();

    let trees = use_hook(MenuTrees::default);
    let menu = use_memo(move || {
        let role = auth.current_user.read().as_ref().map(|u| u.user_type.clone());
        role.map(|role| visible_menu(&trees, &role)).unwrap_or_default()
    });

    let initial_path = path.clone();
    use_effect(move || expansion.hydrate(&initial_path));
    use_route_auto_expand(path.clone());

    let trail = active_trail(&menu.read(), &path);
    let title = page_title(&menu.read(), &trail).unwrap_or_default();

    let user = auth.current_user.read().clone();
    let (name, initials, role) = match &user {
        Some(user) => (user.name.clone(), user.initials(), user.user_type.clone()),
        None => (String::new(), String::new(), UserRole::Unknown),
    };
    let sign_out = use_callback(move |()| {
        let api = api.clone();
        spawn(async move {
            if let Err(e) = api.logout().await {
                tracing::debug!(error = %e, "server logout failed");
            }
        });
        auth.clear_auth();
        navigator().push(Route::Login { redirect: None });
    });

    let tone = role.permission_level_color().as_str().to_string();
    let level = role.admin_level_text();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "ExpertLink" }
                        span { class: "sidebar-brand-sub",
                            if role == UserRole::Expert { "Expert" } else { "Admin" }
                        }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarNav { menu: menu(), trail: trail.clone() }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Access" }
                        Badge { tone: tone.clone(), "{level}" }
                    }
                    button {
                        r#type: "button",
                        class: "sidebar-logout",
                        onclick: move |_| sign_out.call(()),
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                header { class: "navbar-bar",
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "navbar-title", "{title}" }
                    div { class: "navbar-spacer" }
                    div { class: "navbar-user",
                        span { class: "navbar-avatar", "aria-hidden": "true", "{initials}" }
                        span { class: "navbar-user-name", "{name}" }
                        Badge { tone: tone.clone(), "{level}" }
                    }
                    button {
                        r#type: "button",
                        class: "navbar-logout",
                        onclick: move |_| sign_out.call(()),
                        "Sign Out"
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
