//! Registration page component.

use web_types::Registration;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;

/// Registration page component.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form = use_state(Registration::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.set(Registration {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_username_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.set(Registration {
                username: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.set(Registration {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let registration = (*form).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::auth::register(&registration).await {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => error.set(Some(register_error(&err))),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <form {onsubmit} class="auth-form">
                <h2>{"Register"}</h2>

                if let Some(message) = &*error {
                    <div class="error-message">{ message }</div>
                }

                <div class="form-group">
                    <label>{"Email:"}</label>
                    <input
                        type="email"
                        value={form.email.clone()}
                        oninput={on_email_input}
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label>{"Username:"}</label>
                    <input
                        type="text"
                        value={form.username.clone()}
                        oninput={on_username_input}
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label>{"Password:"}</label>
                    <input
                        type="password"
                        value={form.password.clone()}
                        oninput={on_password_input}
                        required={true}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Registering..." } else { "Register" } }
                </button>

                <p>
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Login here"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}

fn register_error(error: &api::ApiError) -> String {
    match error {
        api::ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        _ => "Registration failed".to_string(),
    }
}
