use api::LoginRequest;
use dioxus::prelude::*;
use tracing::warn;

use crate::core::{backend::use_api, dialog, session::use_session};
use crate::t;

#[component]
pub fn LoginPage() -> Element {
    let client = use_api();
    let mut session = use_session();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        spawn(async move {
            match client.login(&request).await {
                Ok(user) => {
                    session.register(user);
                    dialog::alert(&t!("login-success"));
                    nav.push("/");
                }
                Err(err) => {
                    warn!("Login for {} failed: {err}", request.email);
                    dialog::alert(&t!("login-failed"));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-auth",
            div { class: "auth-card",
                h2 { class: "auth-card__title", {t!("login-title")} }
                form { class: "form", onsubmit: onsubmit,
                    div { class: "form__field",
                        label { r#for: "email", {t!("form-email")} }
                        input {
                            r#type: "email",
                            name: "email",
                            id: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form__field",
                        label { r#for: "password", {t!("form-password")} }
                        input {
                            r#type: "password",
                            name: "password",
                            id: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button { r#type: "submit", class: "button button--primary button--block",
                        {t!("login-submit")}
                    }
                }
            }
        }
    }
}
