//! Akademia Site Frontend Entry Point

mod api;
mod app;
mod carousel;
mod components;
mod config;
mod contact;
mod context;
mod i18n;
mod logging;
mod models;
mod news;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    mount_to_body(App);
}
