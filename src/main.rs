mod api;
mod app;
mod components;
mod models;
mod pages;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
