use leptos::*;
use log::info;

use crate::app::App;

mod api;
mod app;
mod components;
mod error;
mod explore;
mod routing;

fn main() {

    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Debug)
        .expect("The console logger should initialize.");

    info!("Harvex UI started.");

    mount_to_body(|| view! { <App /> })
}
