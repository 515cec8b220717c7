//! Readings line chart with a timestamp-range filter.
//!
//! Temperature plots against the left axis, humidity against the right, as
//! two SVG polylines over evenly spaced sample points. Applying a filter
//! refetches the readings for the parent sensor with the chosen bounds.

use web_types::{Reading, ReadingQuery};
use yew::prelude::*;

use crate::{api, time};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const MARGIN: f64 = 40.0;

const TEMPERATURE_COLOR: &str = "#ff7300";
const HUMIDITY_COLOR: &str = "#387908";

/// Properties for ReadingsChart component.
#[derive(Properties, PartialEq)]
pub struct ReadingsChartProps {
    pub sensor_id: i64,
    /// Readings loaded by the parent page; the chart refetches on its own
    /// when a timestamp filter is applied.
    pub readings: Vec<Reading>,
}

/// Dual-axis line chart over a sensor's readings.
#[function_component(ReadingsChart)]
pub fn readings_chart(props: &ReadingsChartProps) -> Html {
    let readings = use_state(|| props.readings.clone());
    let loading = use_state(|| false);
    let from = use_state(String::new);
    let to = use_state(String::new);

    // Track the parent's readings when it reloads
    {
        let readings = readings.clone();
        use_effect_with(props.readings.clone(), move |incoming| {
            readings.set(incoming.clone());
        });
    }

    let on_from_input = {
        let from = from.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            from.set(input.value());
        })
    };

    let on_to_input = {
        let to = to.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            to.set(input.value());
        })
    };

    let on_apply = {
        let readings = readings.clone();
        let loading = loading.clone();
        let from = from.clone();
        let to = to.clone();
        let sensor_id = props.sensor_id;
        Callback::from(move |_| {
            let query = ReadingQuery {
                timestamp_from: time::parse_input(&from),
                timestamp_to: time::parse_input(&to),
            };
            let readings = readings.clone();
            let loading = loading.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::readings::list(sensor_id, &query).await {
                    Ok(data) => readings.set(data),
                    Err(error) => {
                        let message = format!("Failed to load readings: {error}");
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(&message.into());
                        })
                        .forget();
                        gloo_dialogs::alert("Failed to load readings");
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="sensor-chart">
            <div class="chart-controls">
                <label>
                    {"From: "}
                    <input type="datetime-local" value={(*from).clone()} oninput={on_from_input} />
                </label>
                <label>
                    {"To: "}
                    <input type="datetime-local" value={(*to).clone()} oninput={on_to_input} />
                </label>
                <button class="btn btn-secondary" onclick={on_apply} disabled={*loading}>
                    { if *loading { "Loading..." } else { "Apply Filters" } }
                </button>
            </div>
            { chart_body(&readings) }
        </div>
    }
}

fn chart_body(readings: &[Reading]) -> Html {
    if readings.is_empty() {
        return html! {
            <div class="no-data">
                {"No readings available for the selected period"}
                <br />
                <small>{"Try adding a reading using the form below"}</small>
            </div>
        };
    }

    let temperatures: Vec<f64> = readings.iter().map(|r| r.temperature).collect();
    let humidities: Vec<f64> = readings.iter().map(|r| r.humidity).collect();
    let (t_low, t_high) = series_bounds(&temperatures);
    let (h_low, h_high) = series_bounds(&humidities);

    let first = time::display(readings[0].timestamp);
    let last = time::display(readings[readings.len() - 1].timestamp);

    let left = format!("{MARGIN}");
    let right = format!("{:.1}", WIDTH - MARGIN);

    html! {
        <>
            <svg class="chart" viewBox={format!("0 0 {WIDTH} {HEIGHT}")}>
                { for [0.25, 0.5, 0.75].into_iter().map(|fraction| {
                    let y = format!("{:.1}", MARGIN + (HEIGHT - 2.0 * MARGIN) * fraction);
                    html! {
                        <line x1={left.clone()} y1={y.clone()} x2={right.clone()} y2={y}
                              class="grid-line" />
                    }
                })}
                <polyline points={polyline_points(&temperatures, t_low, t_high)}
                          fill="none" stroke={TEMPERATURE_COLOR} stroke-width="2" />
                <polyline points={polyline_points(&humidities, h_low, h_high)}
                          fill="none" stroke={HUMIDITY_COLOR} stroke-width="2" />

                <text x="4" y={format!("{:.1}", MARGIN + 4.0)} class="axis-label">
                    { format!("{t_high:.1}") }
                </text>
                <text x="4" y={format!("{:.1}", HEIGHT - MARGIN)} class="axis-label">
                    { format!("{t_low:.1}") }
                </text>
                <text x={format!("{:.1}", WIDTH - MARGIN + 4.0)} y={format!("{:.1}", MARGIN + 4.0)}
                      class="axis-label">
                    { format!("{h_high:.1}") }
                </text>
                <text x={format!("{:.1}", WIDTH - MARGIN + 4.0)} y={format!("{:.1}", HEIGHT - MARGIN)}
                      class="axis-label">
                    { format!("{h_low:.1}") }
                </text>
                <text x={left} y={format!("{:.1}", HEIGHT - 8.0)} class="axis-label">
                    { first }
                </text>
                <text x={right} y={format!("{:.1}", HEIGHT - 8.0)} class="axis-label"
                      text-anchor="end">
                    { last }
                </text>
            </svg>
            <div class="chart-legend">
                <span class="legend-item">
                    <span class="legend-swatch"
                          style={format!("background: {TEMPERATURE_COLOR}")}></span>
                    {"Temperature (°C)"}
                </span>
                <span class="legend-item">
                    <span class="legend-swatch"
                          style={format!("background: {HUMIDITY_COLOR}")}></span>
                    {"Humidity (%)"}
                </span>
            </div>
        </>
    }
}

/// Series bounds, widened so a flat series still draws inside the plot.
fn series_bounds(values: &[f64]) -> (f64, f64) {
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for &value in values {
        low = low.min(value);
        high = high.max(value);
    }
    if values.is_empty() {
        (0.0, 1.0)
    } else if (high - low).abs() < f64::EPSILON {
        (low - 1.0, high + 1.0)
    } else {
        (low, high)
    }
}

/// SVG polyline points for evenly spaced samples scaled into the plot area.
/// A single sample is centered horizontally.
fn polyline_points(values: &[f64], low: f64, high: f64) -> String {
    let inner_width = WIDTH - 2.0 * MARGIN;
    let inner_height = HEIGHT - 2.0 * MARGIN;
    let count = values.len();

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let x = if count > 1 {
                MARGIN + inner_width * index as f64 / (count - 1) as f64
            } else {
                MARGIN + inner_width / 2.0
            };
            let y = HEIGHT - MARGIN - (value - low) / (high - low) * inner_height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_bounds_span() {
        assert_eq!(series_bounds(&[21.0, 24.5, 19.5]), (19.5, 24.5));
    }

    #[test]
    fn test_series_bounds_flat_series_widens() {
        assert_eq!(series_bounds(&[20.0, 20.0]), (19.0, 21.0));
    }

    #[test]
    fn test_polyline_spans_the_plot_area() {
        let points = polyline_points(&[0.0, 5.0, 10.0], 0.0, 10.0);
        let coords: Vec<&str> = points.split(' ').collect();

        assert_eq!(coords.len(), 3);
        // first sample sits on the left edge at the bottom of the plot
        assert_eq!(coords[0], "40.0,260.0");
        // last sample sits on the right edge at the top
        assert_eq!(coords[2], "680.0,40.0");
    }

    #[test]
    fn test_polyline_midpoint_is_centered_vertically() {
        let points = polyline_points(&[0.0, 5.0, 10.0], 0.0, 10.0);
        let coords: Vec<&str> = points.split(' ').collect();

        assert_eq!(coords[1], "360.0,150.0");
    }

    #[test]
    fn test_single_sample_is_centered_horizontally() {
        let points = polyline_points(&[3.0], 2.0, 4.0);
        assert_eq!(points, "360.0,150.0");
    }
}
