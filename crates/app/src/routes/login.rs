use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Login page with email and password.
/// Accepts an optional `redirect` query param; after login it navigates there
/// instead of the role's landing page.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move |fallback: Route| {
        let target = redirect_target
            .read()
            .as_deref()
            .and_then(|path| path.parse::<Route>().ok())
            .filter(|route| !matches!(route, Route::Login { .. } | Route::NotFound { .. }));
        navigator().push(target.unwrap_or(fallback));
    };

    // Already signed in, or just signed in below
    use_effect(move || {
        if let Some(user) = auth.current_user.read().as_ref() {
            go_to_destination(Route::home_for(&user.user_type));
        }
    });

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match api.login(&email(), &password()).await {
                Ok(user) => auth.set_user(user),
                Err(e) => {
                    tracing::info!(error = %e, "sign-in failed");
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.friendly_message()));
                    } else {
                        field_errors.set(e.field_errors);
                    }
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            section { class: "auth-card",
                header { class: "auth-card-header",
                    h1 { class: "auth-card-title", "Sign In" }
                    p { class: "auth-card-description", "ExpertLink administration" }
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", role: "alert", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "email", "Email" }
                        input {
                            r#type: "email",
                            id: "email",
                            placeholder: "admin@example.com",
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("email") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            r#type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
