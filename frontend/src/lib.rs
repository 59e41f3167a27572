mod api;
mod components;
pub mod controllers;
pub mod utils;

use components::{ChatPanel, FileIntake};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main class="app">
            <FileIntake />
            <ChatPanel />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
