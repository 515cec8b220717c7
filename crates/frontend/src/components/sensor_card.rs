//! Sensor list card component.

use web_types::Sensor;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for SensorCard component.
#[derive(Properties, PartialEq)]
pub struct SensorCardProps {
    pub sensor: Sensor,
    /// Emits the sensor id when the delete button is pressed.
    pub on_delete: Callback<i64>,
}

/// One sensor in the list, linking to its detail page.
#[function_component(SensorCard)]
pub fn sensor_card(props: &SensorCardProps) -> Html {
    let sensor = &props.sensor;

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = sensor.id;
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <div class="sensor-card">
            <div class="sensor-info">
                <h3>
                    <Link<Route> to={Route::SensorDetail { id: sensor.id }}>
                        { &sensor.name }
                    </Link<Route>>
                </h3>
                <p><strong>{"Model: "}</strong>{ &sensor.model }</p>
                if let Some(description) = &sensor.description {
                    <p class="sensor-description">{ description }</p>
                }
            </div>
            <div class="sensor-actions">
                <Link<Route> to={Route::SensorDetail { id: sensor.id }} classes="btn btn-primary">
                    {"View Details"}
                </Link<Route>>
                <button class="btn btn-danger" onclick={on_delete}>
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}
