//! Main application component with routing.

use web_types::RegisteredUser;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::RequireAuth;
use crate::pages::{LoginPage, RegisterPage, SensorDetailPage, SensorsPage};
use crate::{api, session};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/sensors")]
    Sensors,
    #[at("/sensors/:id")]
    SensorDetail { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Sensors} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Sensors => html! {
            <RequireAuth>
                <SensorsPage />
            </RequireAuth>
        },
        Route::SensorDetail { id } => html! {
            <RequireAuth>
                <SensorDetailPage sensor_id={id} />
            </RequireAuth>
        },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="layout">
                <Header />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Top navigation bar. The nav links only show for a signed-in session.
#[function_component(Header)]
fn header() -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let authed = session::is_authenticated();
    let user = use_state(|| None::<RegisteredUser>);

    // Fetch the account behind the session for the greeting
    {
        let user = user.clone();
        use_effect_with(authed, move |&authed| {
            if authed {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Ok(account) = api::auth::me().await {
                        user.set(Some(account));
                    }
                });
            } else {
                user.set(None);
            }
        });
    }

    let on_logout = {
        let navigator = navigator.clone();
        let user = user.clone();
        Callback::from(move |_| {
            session::clear();
            user.set(None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_auth_page = matches!(route, Some(Route::Login | Route::Register));

    html! {
        <header class="header">
            <div class="container">
                <Link<Route> to={Route::Sensors} classes="logo">
                    {"Sensor Dashboard"}
                </Link<Route>>
                if authed && !on_auth_page {
                    <nav class="nav">
                        <Link<Route> to={Route::Sensors}>{"Sensors"}</Link<Route>>
                        if let Some(account) = &*user {
                            <span class="nav-user">{ &account.username }</span>
                        }
                        <button class="logout-btn" onclick={on_logout}>
                            {"Logout"}
                        </button>
                    </nav>
                }
            </div>
        </header>
    }
}
