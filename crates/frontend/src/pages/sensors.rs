//! Sensors list page component.

use web_types::{Sensor, SensorDraft, SensorQuery};
use yew::prelude::*;

use crate::api;
use crate::components::{Loading, Pagination, SensorCard};

/// Sensors page component: add form, search, paginated list.
#[function_component(SensorsPage)]
pub fn sensors_page() -> Html {
    let sensors = use_state(Vec::<Sensor>::new);
    let pages = use_state(|| 1u32);
    let page = use_state(|| 1u32);
    let search = use_state(String::new);
    let loading = use_state(|| true);
    // bumped after every mutation to refetch the current page
    let reload = use_state(|| 0u32);

    let name = use_state(String::new);
    let model = use_state(String::new);
    let description = use_state(String::new);

    // Fetch sensors
    {
        let sensors = sensors.clone();
        let pages = pages.clone();
        let loading = loading.clone();
        let search = search.clone();

        use_effect_with((*page, *reload), move |&(page, _)| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let query = SensorQuery {
                    q: (*search).clone(),
                    page,
                    ..Default::default()
                };
                match api::sensors::list(&query).await {
                    Ok(result) => {
                        pages.set(result.total_pages());
                        sensors.set(result.into_items());
                    }
                    Err(error) => {
                        let message = format!("Failed to load sensors: {error}");
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(&message.into());
                        })
                        .forget();
                        gloo_dialogs::alert("Failed to load sensors");
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    // Search resets to the first page; a repeat search on page 1 refetches
    let on_search = {
        let page = page.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *page != 1 {
                page.set(1);
            } else {
                reload.set(*reload + 1);
            }
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_model_input = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            model.set(input.value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_create = {
        let name = name.clone();
        let model = model.clone();
        let description = description.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = SensorDraft {
                name: (*name).clone(),
                model: (*model).clone(),
                description: if description.is_empty() {
                    None
                } else {
                    Some((*description).clone())
                },
            };
            let name = name.clone();
            let model = model.clone();
            let description = description.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::sensors::create(&draft).await {
                    Ok(_) => {
                        name.set(String::new());
                        model.set(String::new());
                        description.set(String::new());
                        reload.set(*reload + 1);
                    }
                    Err(error) => {
                        let message = format!("Failed to create sensor: {error}");
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(&message.into());
                        })
                        .forget();
                        gloo_dialogs::alert("Failed to create sensor");
                    }
                }
            });
        })
    };

    let on_delete = {
        let reload = reload.clone();
        Callback::from(move |id: i64| {
            if !gloo_dialogs::confirm("Are you sure you want to delete this sensor?") {
                return;
            }
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::sensors::delete(id).await {
                    Ok(()) => reload.set(*reload + 1),
                    Err(error) => {
                        let message = format!("Failed to delete sensor: {error}");
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(&message.into());
                        })
                        .forget();
                        gloo_dialogs::alert("Failed to delete sensor");
                    }
                }
            });
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    html! {
        <div>
            <h1>{"Sensors"}</h1>

            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Add New Sensor"}</h3>
                </div>
                <form onsubmit={on_create} class="sensor-form">
                    <input
                        type="text"
                        placeholder="Name"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        required={true}
                    />
                    <input
                        type="text"
                        placeholder="Model"
                        value={(*model).clone()}
                        oninput={on_model_input}
                        required={true}
                    />
                    <input
                        type="text"
                        placeholder="Description (optional)"
                        value={(*description).clone()}
                        oninput={on_description_input}
                    />
                    <button type="submit" class="btn btn-primary">{"Add Sensor"}</button>
                </form>
            </div>

            <form onsubmit={on_search} class="search-form">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by name or model..."
                    value={(*search).clone()}
                    oninput={on_search_input}
                />
                <button type="submit" class="btn btn-secondary">{"Search"}</button>
            </form>

            if *loading {
                <Loading label="Loading sensors..." />
            } else if sensors.is_empty() {
                <div class="card">
                    <p>{"No sensors found."}</p>
                </div>
            } else {
                <div class="sensors-grid">
                    { for sensors.iter().map(|sensor| {
                        html! {
                            <SensorCard
                                key={sensor.id}
                                sensor={sensor.clone()}
                                on_delete={on_delete.clone()}
                            />
                        }
                    })}
                </div>

                if *pages > 1 {
                    <Pagination page={*page} pages={*pages} on_change={on_page_change} />
                }
            }
        </div>
    }
}
