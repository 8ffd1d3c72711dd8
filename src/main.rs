mod components;
mod config;
mod error;
mod model;
mod sound;
mod state;
mod util;

use components::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}
