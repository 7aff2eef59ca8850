use gloo_net::http::Method;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::{InputEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_empty, fetch_json, ApiError};
use crate::session::{self, SessionInformation};
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                      structures exchanged with the API                     */
/* -------------------------------------------------------------------------- */

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub password: String,
}

/// Shown on any auth failure. The server's own message is never surfaced.
pub const GENERIC_ERROR: &str = "An error occurred";

/* -------------------------------------------------------------------------- */
/*                                auth gateway                                */
/* -------------------------------------------------------------------------- */

/// Single-shot credential exchange; the caller stores the result in the
/// session holder.
pub async fn login(credentials: &LoginRequest) -> Result<SessionInformation, ApiError> {
    fetch_json(Method::POST, "/api/auth/login", Some(credentials)).await
}

/// Content-less on success.
pub async fn register(profile: &RegisterRequest) -> Result<(), ApiError> {
    fetch_empty(Method::POST, "/api/auth/register", Some(profile)).await
}

/* -------------------------------------------------------------------------- */
/*                             field-level checks                             */
/* -------------------------------------------------------------------------- */

pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn register_form_valid(first: &str, last: &str, email: &str, password: &str) -> bool {
    !first.is_empty() && !last.is_empty() && !password.is_empty() && is_valid_email(email)
}

/* -------------------------------------------------------------------------- */
/*                                 login page                                 */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let navigator = use_navigator().unwrap();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(String::new);

    let onsubmit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let email = email_ref.cast::<HtmlInputElement>().unwrap().value();
            let password = password_ref.cast::<HtmlInputElement>().unwrap().value();
            if email.is_empty() || password.is_empty() {
                return;
            }

            spawn_local({
                let error = error.clone();
                let navigator = navigator.clone();

                async move {
                    match login(&LoginRequest { email, password }).await {
                        Ok(info) => {
                            session::log_in(info);
                            navigator.push(&Route::Sessions);
                        }
                        Err(e) => {
                            log::error!("login failed: {e}");
                            error.set(GENERIC_ERROR.into());
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="login-container">
            <h2>{"Login"}</h2>

            <form {onsubmit}>
                <input ref={email_ref} type="email" placeholder="Email" />
                <input ref={password_ref} type="password" placeholder="Password" />
                <button type="submit">{"Submit"}</button>
            </form>

            {
                if !error.is_empty() {
                    html!(<p class="error">{ &*error }</p>)
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                               register page                                */
/* -------------------------------------------------------------------------- */

#[function_component(RegisterForm)]
pub fn register_form() -> Html {
    let navigator = use_navigator().unwrap();
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let valid = register_form_valid(&first_name, &last_name, &email, &password);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            if !register_form_valid(&first_name, &last_name, &email, &password) {
                return;
            }

            let profile = RegisterRequest {
                email: (*email).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                password: (*password).clone(),
            };

            spawn_local({
                let error = error.clone();
                let navigator = navigator.clone();

                async move {
                    match register(&profile).await {
                        Ok(()) => navigator.push(&Route::Login),
                        Err(e) => {
                            log::error!("register failed: {e}");
                            error.set(GENERIC_ERROR.into());
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="register-container">
            <h2>{"Register"}</h2>

            <form {onsubmit}>
                <input
                    type="text"
                    placeholder="First name"
                    value={(*first_name).clone()}
                    oninput={bind(&first_name)}
                />
                <input
                    type="text"
                    placeholder="Last name"
                    value={(*last_name).clone()}
                    oninput={bind(&last_name)}
                />
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={bind(&password)}
                />
                <button type="submit" disabled={!valid}>{"Submit"}</button>
            </form>

            {
                if !error.is_empty() {
                    html!(<p class="error">{ &*error }</p>)
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

/* ---------------- tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_accepts_plausible_addresses() {
        assert!(is_valid_email("yoga@studio.com"));
        assert!(is_valid_email("john.doe@test.com"));
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@studio.com"));
        assert!(!is_valid_email("yoga@studio"));
        assert!(!is_valid_email("yoga@.com."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn register_needs_every_field() {
        assert!(register_form_valid("John", "Doe", "john@test.com", "password123"));
        assert!(!register_form_valid("John", "Doe", "", "password123"));
        assert!(!register_form_valid("John", "Doe", "invalid-email", "password123"));
        assert!(!register_form_valid("", "Doe", "john@test.com", "password123"));
        assert!(!register_form_valid("John", "", "john@test.com", "password123"));
        assert!(!register_form_valid("John", "Doe", "john@test.com", ""));
    }

    #[test]
    fn banner_text_is_generic() {
        // The duplicate-email 400 carries "Email already exists"; the UI must
        // never show it.
        assert_eq!(GENERIC_ERROR, "An error occurred");
        assert!(!GENERIC_ERROR.contains("exists"));
    }

    #[test]
    fn register_body_uses_backend_field_names() {
        let p = RegisterRequest {
            email: "john.doe@test.com".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            password: "password123".into(),
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["firstName"], "John");
        assert_eq!(v["lastName"], "Doe");
        assert!(v.get("first_name").is_none());
    }
}
