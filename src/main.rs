mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use dioxus::logger::tracing::Level;

use crate::app::App;
use crate::config::default_webview_data_dir;

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger should initialize once");

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("People Table"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}
