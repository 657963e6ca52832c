//! Quill Frontend Entry Point

mod app;
mod backend;
mod commands;
mod components;
mod config;
mod context;
mod dnd;
mod error;
mod folders;
mod keyboard;
mod logger;
mod models;
mod note_text;
mod notify;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    logger::init();
    log::info!("Quill frontend starting");
    mount_to_body(App);
}
