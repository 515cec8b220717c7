//! Pagination controls component.

use yew::prelude::*;

/// Properties for Pagination component.
#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Current 1-based page
    pub page: u32,
    /// Total number of pages
    pub pages: u32,
    /// Emits the page to move to.
    pub on_change: Callback<u32>,
}

/// Previous/next controls with a page indicator.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_previous = {
        let on_change = props.on_change.clone();
        let page = props.page;
        Callback::from(move |_| on_change.emit(page - 1))
    };
    let on_next = {
        let on_change = props.on_change.clone();
        let page = props.page;
        Callback::from(move |_| on_change.emit(page + 1))
    };

    html! {
        <div class="pagination">
            <button class="btn btn-secondary" disabled={props.page <= 1} onclick={on_previous}>
                {"Previous"}
            </button>
            <span>{ format!("Page {} of {}", props.page, props.pages) }</span>
            <button class="btn btn-secondary" disabled={props.page >= props.pages} onclick={on_next}>
                {"Next"}
            </button>
        </div>
    }
}
