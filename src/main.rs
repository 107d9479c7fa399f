// src/main.rs
mod app;
mod catalog;
mod components;
mod config;
mod pages;

use std::rc::Rc;

use gloo::console;

use app::{App, AppProps};
use catalog::Catalog;

fn main() {
    // Content defects are fatal: never mount a site with a broken catalog.
    let catalog = match Catalog::bundled() {
        Ok(c) => c,
        Err(e) => {
            console::error!(format!("activity catalog rejected: {e}"));
            return;
        }
    };
    console::log!(format!("{} activities loaded", catalog.len()));

    yew::Renderer::<App>::with_props(AppProps {
        catalog: Rc::new(catalog),
    })
    .render();
}
