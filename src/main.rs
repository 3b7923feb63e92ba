#![allow(warnings)]
//! MenuCraft Editor Entry Point

mod app;
mod components;
mod dialog;
mod export;
mod icons;
mod models;
mod plugins;
mod state;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
