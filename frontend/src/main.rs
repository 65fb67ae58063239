#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use dioxus::prelude::*;
use pages::landing::Landing;

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    rsx! { Landing {} }
}
