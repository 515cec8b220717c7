//! Route guard for the signed-in area.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session;

/// Properties for RequireAuth component.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only with a stored session, otherwise redirects to
/// the login page.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    if session::is_authenticated() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
