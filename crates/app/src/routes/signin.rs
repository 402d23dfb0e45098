use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use session::{mock_users, DEMO_PASSWORD};
use shared_types::{LoginForm, ALL_ROLES};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect,
    Input,
};

/// Sign-in page: role, email and password against the demo accounts.
#[component]
pub fn SignIn() -> Element {
    let auth = use_auth();
    let mut form = use_signal(LoginForm::new);
    let mut show_password = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in, either restored at boot or just now through the
    // form: the session write re-renders this page and the redirect runs here.
    if !auth.is_checking() && auth.is_authenticated() {
        navigator().replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);

        let submitted = form();
        if let Err(e) = submitted.check() {
            error_msg.set(Some(e.message));
            return;
        }

        loading.set(true);
        if let Err(e) = auth.login(submitted).await {
            error_msg.set(Some(e.message));
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./signin.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your email and password to sign in!" }
                }

                CardContent {
                    form { class: "auth-form", onsubmit: handle_submit,
                        FormSelect {
                            label: "Role",
                            required: true,
                            value: form.read().role.clone(),
                            onchange: move |e: Event<FormData>| form.write().role = e.value(),
                            for role in ALL_ROLES.iter() {
                                option { key: "{role.as_str()}", value: role.as_str(), "{role.display_name()}" }
                            }
                        }
                        Input {
                            label: "Email",
                            required: true,
                            input_type: "email",
                            placeholder: "info@gmail.com",
                            value: form.read().email.clone(),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                        }
                        div { class: "auth-password",
                            Input {
                                label: "Password",
                                required: true,
                                input_type: if show_password() { "text".to_string() } else { "password".to_string() },
                                placeholder: "Enter your password",
                                value: form.read().password.clone(),
                                on_input: move |e: FormEvent| form.write().password = e.value(),
                            }
                            button {
                                r#type: "button",
                                class: "auth-password-toggle",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() { "Hide" } else { "Show" }
                            }
                        }

                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }

                CardFooter {
                    div { class: "auth-hint",
                        p { "Demo accounts (password "
                            code { "{DEMO_PASSWORD}" }
                            "):"
                        }
                        ul {
                            for user in mock_users() {
                                li { key: "{user.id}",
                                    code { "{user.email}" }
                                    " · {user.role.display_name()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
