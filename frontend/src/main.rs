use crate::app::App;

mod app;
mod card_grid;
mod components;
mod helpers;
mod logger;
mod tops_sheet;

fn main() {
    logger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
