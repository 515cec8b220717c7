//! Sensor detail page component.

use web_types::{Reading, ReadingDraft, ReadingQuery, Sensor, SensorDraft};
use yew::prelude::*;

use crate::components::{Loading, ReadingsChart, StatCard};
use crate::{api, time};

/// Properties for SensorDetailPage.
#[derive(Properties, PartialEq)]
pub struct SensorDetailPageProps {
    pub sensor_id: i64,
}

/// Sensor detail page component: header stats, readings chart, add-reading
/// form and a full-replace edit form.
#[function_component(SensorDetailPage)]
pub fn sensor_detail_page(props: &SensorDetailPageProps) -> Html {
    let sensor = use_state(|| None::<Sensor>);
    let readings = use_state(Vec::<Reading>::new);
    let loading = use_state(|| true);
    let api_error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    let temperature = use_state(String::new);
    let humidity = use_state(String::new);
    let timestamp = use_state(time::now_input_value);

    let editing = use_state(|| false);
    let edit_name = use_state(String::new);
    let edit_model = use_state(String::new);
    let edit_description = use_state(String::new);

    // Fetch sensor and readings
    {
        let sensor = sensor.clone();
        let readings = readings.clone();
        let loading = loading.clone();
        let api_error = api_error.clone();

        use_effect_with((props.sensor_id, *reload), move |&(sensor_id, _)| {
            loading.set(true);
            api_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::sensors::get(sensor_id).await {
                    Ok(data) => sensor.set(Some(data)),
                    Err(error) => {
                        let message = format!("Failed to load sensor {sensor_id}: {error}");
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(&message.into());
                        })
                        .forget();
                        sensor.set(None);
                        api_error.set(Some(error.to_string()));
                        loading.set(false);
                        return;
                    }
                }

                match api::readings::list(sensor_id, &ReadingQuery::default()).await {
                    Ok(data) => readings.set(data),
                    Err(error) => {
                        api_error.set(Some(error.to_string()));
                        gloo_dialogs::alert("Failed to load sensor details");
                    }
                }

                loading.set(false);
            });
        });
    }

    let on_temperature_input = {
        let temperature = temperature.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            temperature.set(input.value());
        })
    };

    let on_humidity_input = {
        let humidity = humidity.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            humidity.set(input.value());
        })
    };

    let on_timestamp_input = {
        let timestamp = timestamp.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            timestamp.set(input.value());
        })
    };

    let on_add_reading = {
        let temperature = temperature.clone();
        let humidity = humidity.clone();
        let timestamp = timestamp.clone();
        let reload = reload.clone();
        let sensor_id = props.sensor_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = match reading_draft(&temperature, &humidity, &timestamp) {
                Some(draft) => draft,
                None => {
                    gloo_dialogs::alert("Enter a valid temperature, humidity and timestamp");
                    return;
                }
            };
            let temperature = temperature.clone();
            let humidity = humidity.clone();
            let timestamp = timestamp.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::readings::create(sensor_id, &draft).await {
                    Ok(_) => {
                        gloo_dialogs::alert("Reading added successfully!");
                        temperature.set(String::new());
                        humidity.set(String::new());
                        timestamp.set(time::now_input_value());
                        reload.set(*reload + 1);
                    }
                    Err(error) => {
                        let message = format!("Failed to add reading: {error}");
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(&message.into());
                        })
                        .forget();
                        gloo_dialogs::alert("Failed to add reading");
                    }
                }
            });
        })
    };

    let on_edit_open = {
        let sensor = sensor.clone();
        let editing = editing.clone();
        let edit_name = edit_name.clone();
        let edit_model = edit_model.clone();
        let edit_description = edit_description.clone();
        Callback::from(move |_| {
            if let Some(current) = &*sensor {
                edit_name.set(current.name.clone());
                edit_model.set(current.model.clone());
                edit_description.set(current.description.clone().unwrap_or_default());
                editing.set(true);
            }
        })
    };

    let on_edit_cancel = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_edit_name_input = {
        let edit_name = edit_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            edit_name.set(input.value());
        })
    };

    let on_edit_model_input = {
        let edit_model = edit_model.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            edit_model.set(input.value());
        })
    };

    let on_edit_description_input = {
        let edit_description = edit_description.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            edit_description.set(input.value());
        })
    };

    let on_edit_save = {
        let sensor = sensor.clone();
        let editing = editing.clone();
        let edit_name = edit_name.clone();
        let edit_model = edit_model.clone();
        let edit_description = edit_description.clone();
        let sensor_id = props.sensor_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = SensorDraft {
                name: (*edit_name).clone(),
                model: (*edit_model).clone(),
                description: if edit_description.is_empty() {
                    None
                } else {
                    Some((*edit_description).clone())
                },
            };
            let sensor = sensor.clone();
            let editing = editing.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::sensors::update(sensor_id, &draft).await {
                    Ok(updated) => {
                        sensor.set(Some(updated));
                        editing.set(false);
                    }
                    Err(error) => {
                        let message = format!("Failed to update sensor: {error}");
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(&message.into());
                        })
                        .forget();
                        gloo_dialogs::alert("Failed to update sensor");
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <Loading label="Loading sensor details..." /> };
    }

    let Some(sensor_data) = sensor.as_ref() else {
        return html! {
            <div class="card">
                <h1>{"Sensor not found"}</h1>
                <p>{"The requested sensor could not be found."}</p>
            </div>
        };
    };

    let latest = readings.last();

    html! {
        <div>
            <div class="card">
                <div class="card-header">
                    <h1 class="card-title">{ &sensor_data.name }</h1>
                    <button class="btn btn-secondary" onclick={on_edit_open}>
                        {"Edit Sensor"}
                    </button>
                </div>
                <p><strong>{"Model: "}</strong>{ &sensor_data.model }</p>
                if let Some(description) = &sensor_data.description {
                    <p class="sensor-description">{ description }</p>
                }
            </div>

            if let Some(message) = &*api_error {
                <div class="error-message">
                    <strong>{"API Error: "}</strong>{ message }
                </div>
            }

            if *editing {
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Edit Sensor"}</h2>
                    </div>
                    <form onsubmit={on_edit_save} class="sensor-form">
                        <input
                            type="text"
                            placeholder="Name"
                            value={(*edit_name).clone()}
                            oninput={on_edit_name_input}
                            required={true}
                        />
                        <input
                            type="text"
                            placeholder="Model"
                            value={(*edit_model).clone()}
                            oninput={on_edit_model_input}
                            required={true}
                        />
                        <input
                            type="text"
                            placeholder="Description (optional)"
                            value={(*edit_description).clone()}
                            oninput={on_edit_description_input}
                        />
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_edit_cancel}>
                            {"Cancel"}
                        </button>
                    </form>
                </div>
            }

            <div class="stats-grid">
                <StatCard
                    value={readings.len().to_string()}
                    label={"Readings"}
                />
                <StatCard
                    value={latest.map(|r| format!("{:.1} °C", r.temperature)).unwrap_or_else(|| "-".to_string())}
                    label={"Latest Temperature"}
                />
                <StatCard
                    value={latest.map(|r| format!("{:.1} %", r.humidity)).unwrap_or_else(|| "-".to_string())}
                    label={"Latest Humidity"}
                />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{ format!("Readings ({} total)", readings.len()) }</h2>
                </div>
                <ReadingsChart sensor_id={props.sensor_id} readings={(*readings).clone()} />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Add New Reading"}</h3>
                </div>
                <form onsubmit={on_add_reading} class="reading-form">
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Temperature (°C):"}</label>
                            <input
                                type="number"
                                step="0.1"
                                value={(*temperature).clone()}
                                oninput={on_temperature_input}
                                required={true}
                            />
                        </div>

                        <div class="form-group">
                            <label>{"Humidity (%):"}</label>
                            <input
                                type="number"
                                step="0.1"
                                min="0"
                                max="100"
                                value={(*humidity).clone()}
                                oninput={on_humidity_input}
                                required={true}
                            />
                        </div>

                        <div class="form-group">
                            <label>{"Timestamp:"}</label>
                            <input
                                type="datetime-local"
                                value={(*timestamp).clone()}
                                oninput={on_timestamp_input}
                                required={true}
                            />
                        </div>
                    </div>

                    <button type="submit" class="btn btn-primary">{"Add Reading"}</button>
                </form>
            </div>
        </div>
    }
}

/// Build a reading draft from the raw form values, or None when any of them
/// does not parse.
fn reading_draft(temperature: &str, humidity: &str, timestamp: &str) -> Option<ReadingDraft> {
    Some(ReadingDraft {
        temperature: temperature.parse().ok()?,
        humidity: humidity.parse().ok()?,
        timestamp: time::parse_input(timestamp)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_draft_parses_form_values() {
        let draft = reading_draft("22.5", "55.2", "2025-10-01T12:00").unwrap();

        assert_eq!(draft.temperature, 22.5);
        assert_eq!(draft.humidity, 55.2);
        assert_eq!(time::input_value(draft.timestamp), "2025-10-01T12:00");
    }

    #[test]
    fn test_reading_draft_rejects_bad_values() {
        assert!(reading_draft("warm", "55", "2025-10-01T12:00").is_none());
        assert!(reading_draft("22.5", "", "2025-10-01T12:00").is_none());
        assert!(reading_draft("22.5", "55", "noon").is_none());
    }
}
