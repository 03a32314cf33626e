#![allow(warnings)]
//! PixelHub Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod compose;
mod config;
mod context;
mod error;
mod format;
mod forms;
mod logger;
mod models;
mod pages;
mod ranking;
mod routes;
mod session;
mod stats;
mod store;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    mount_to_body(App);
}
