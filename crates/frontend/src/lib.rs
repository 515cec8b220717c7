//! Sensor Dashboard - Yew WASM Frontend
//!
//! This crate provides the browser UI for managing sensor devices and their
//! time-series readings over the REST backend.

mod api;
mod app;
mod components;
mod pages;
mod session;
mod time;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
