//! Shadow Forge Main Entry Point

use zoon::*;

mod app;
mod clipboard;
mod config;
mod controls;
mod dataflow;
mod shadow_layers;
mod subjects;
mod views;

pub fn main() {
    let app = app::ShadowForgeApp::new();
    start_app("app", move || app.root());
}
