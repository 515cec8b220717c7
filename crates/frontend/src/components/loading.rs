//! Loading spinner component.

use yew::prelude::*;

/// Properties for Loading component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Optional label shown under the spinner.
    #[prop_or_default]
    pub label: Option<String>,
}

/// Loading spinner component.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            if let Some(label) = &props.label {
                <p class="loading-label">{ label }</p>
            }
        </div>
    }
}
