//! Login and signup forms. Submitting only simulates a round trip.

use std::fmt;

use dioxus::prelude::*;
use tracing::debug;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::core::timing::sleep_ms;
use crate::i18n;
use crate::t;

/// How long a simulated submit stays busy.
pub const SIMULATED_SUBMIT_MS: u64 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Farmer,
    Buyer,
    Seller,
    Expert,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Farmer,
        UserRole::Buyer,
        UserRole::Seller,
        UserRole::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Buyer => "buyer",
            UserRole::Seller => "seller",
            UserRole::Expert => "expert",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    fn label(self) -> String {
        match self {
            UserRole::Farmer => t!("signup-role-farmer"),
            UserRole::Buyer => t!("signup-role-buyer"),
            UserRole::Seller => t!("signup-role-seller"),
            UserRole::Expert => t!("signup-role-expert"),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

async fn simulate_submit(mut busy: Signal<bool>, form: &'static str) {
    debug!(form, "simulated submit started");
    busy.set(true);
    sleep_ms(SIMULATED_SUBMIT_MS).await;
    busy.set(false);
}

#[component]
fn SocialLogin(caption: String) -> Element {
    i18n::use_language();
    rsx! {
        div { class: "auth-social",
            p { class: "auth-social__caption", "{caption}" }
            div { class: "auth-social__buttons",
                button { r#type: "button", class: "button button--ghost", "🔵 Google" }
                button { r#type: "button", class: "button button--ghost", "📘 Facebook" }
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    i18n::use_language();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !busy() {
            spawn(simulate_submit(busy, "login"));
        }
    };

    rsx! {
        section { class: "page auth-page",
            div { class: "auth-card",
                div { class: "auth-card__header",
                    h2 { class: "auth-card__logo", "AgriGraud" }
                    h3 { {t!("login-welcome")} }
                    p { {t!("login-intro")} }
                }

                form { class: "auth-form", onsubmit: on_submit,
                    div { class: "form-field",
                        label { r#for: "login-email", {t!("auth-email")} }
                        input {
                            id: "login-email",
                            r#type: "email",
                            required: true,
                            placeholder: t!("auth-email-placeholder"),
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "login-password", {t!("auth-password")} }
                        input {
                            id: "login-password",
                            r#type: "password",
                            required: true,
                            placeholder: t!("auth-password-placeholder"),
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    div { class: "auth-form__options",
                        label {
                            input { r#type: "checkbox" }
                            " "
                            {t!("login-remember-me")}
                        }
                        a { class: "auth-link", href: "#", {t!("login-forgot-password")} }
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary auth-form__submit",
                        disabled: busy(),
                        if busy() { {t!("login-submitting")} } else { {t!("login-submit")} }
                    }
                }

                div { class: "auth-card__footer",
                    p {
                        {t!("login-no-account")}
                        " "
                        {nav_link(NavTarget::Signup, &t!("nav-signup"), "auth-link")}
                    }
                }
                SocialLogin { caption: t!("auth-or-continue") }
            }
        }
    }
}

#[component]
pub fn Signup() -> Element {
    i18n::use_language();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(UserRole::default);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !busy() {
            spawn(simulate_submit(busy, "signup"));
        }
    };
    let current_role = role();

    rsx! {
        section { class: "page auth-page",
            div { class: "auth-card",
                div { class: "auth-card__header",
                    h2 { class: "auth-card__logo", "AgriGraud" }
                    h3 { {t!("signup-title")} }
                    p { {t!("signup-intro")} }
                }

                form { class: "auth-form", onsubmit: on_submit,
                    div { class: "form-field",
                        label { r#for: "signup-name", {t!("signup-name")} }
                        input {
                            id: "signup-name",
                            r#type: "text",
                            required: true,
                            placeholder: t!("signup-name-placeholder"),
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "signup-email", {t!("auth-email")} }
                        input {
                            id: "signup-email",
                            r#type: "email",
                            required: true,
                            placeholder: t!("auth-email-placeholder"),
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "signup-phone", {t!("signup-phone")} }
                        input {
                            id: "signup-phone",
                            r#type: "tel",
                            required: true,
                            placeholder: "+91 98765 43210",
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "signup-role", {t!("signup-role")} }
                        select {
                            id: "signup-role",
                            onchange: move |evt| {
                                if let Some(next) = UserRole::parse(&evt.value()) {
                                    role.set(next);
                                }
                            },
                            for option_role in UserRole::ALL {
                                option {
                                    key: "{option_role}",
                                    value: option_role.as_str(),
                                    selected: option_role == current_role,
                                    {option_role.label()}
                                }
                            }
                        }
                    }
                    div { class: "auth-form__row",
                        div { class: "form-field",
                            label { r#for: "signup-password", {t!("auth-password")} }
                            input {
                                id: "signup-password",
                                r#type: "password",
                                required: true,
                                placeholder: "••••••••",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "signup-confirm", {t!("signup-confirm-password")} }
                            input {
                                id: "signup-confirm",
                                r#type: "password",
                                required: true,
                                placeholder: "••••••••",
                                value: "{confirm}",
                                oninput: move |evt| confirm.set(evt.value()),
                            }
                        }
                    }
                    div { class: "auth-form__options",
                        label {
                            input { r#type: "checkbox", required: true }
                            " "
                            {t!("signup-terms")}
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary auth-form__submit",
                        disabled: busy(),
                        if busy() { {t!("signup-submitting")} } else { {t!("signup-submit")} }
                    }
                }

                div { class: "auth-card__footer",
                    p {
                        {t!("signup-has-account")}
                        " "
                        {nav_link(NavTarget::Login, &t!("nav-login"), "auth-link")}
                    }
                }
                SocialLogin { caption: t!("auth-or-continue") }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_option_values() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::default(), UserRole::Farmer);
    }
}
