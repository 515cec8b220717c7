//! Login page component.

use web_types::Credentials;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::{api, session};

/// Login page component.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = Credentials {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::auth::login(&credentials).await {
                    Ok(pair) => {
                        session::store_pair(&pair);
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Sensors);
                        }
                    }
                    Err(err) => error.set(Some(login_error(&err))),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <form {onsubmit} class="auth-form">
                <h2>{"Login"}</h2>

                if let Some(message) = &*error {
                    <div class="error-message">{ message }</div>
                }

                <div class="form-group">
                    <label>{"Username:"}</label>
                    <input
                        type="text"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label>{"Password:"}</label>
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        required={true}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Logging in..." } else { "Login" } }
                </button>

                <p>
                    {"Need an account? "}
                    <Link<Route> to={Route::Register}>{"Register here"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}

fn login_error(error: &api::ApiError) -> String {
    match error {
        api::ApiError::Status {
            status: 400 | 401, ..
        } => "Invalid username or password".to_string(),
        other => other.to_string(),
    }
}
