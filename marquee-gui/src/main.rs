#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use druid::{AppLauncher, Target};
use env_logger::{Builder, Env};

use crate::{data::AppState, delegate::Delegate, webapi::WebApi};

const ENV_LOG: &str = "MARQUEE_LOG";
const ENV_LOG_STYLE: &str = "MARQUEE_LOG_STYLE";

const STORE_BASE_URL: &str = "https://react-http-c23cc-default-rtdb.firebaseio.com";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    WebApi::new(STORE_BASE_URL).install_as_global();

    let state = AppState::default();
    let window = ui::main_window();
    let delegate = Delegate::with_main(window.id);

    let launcher = AppLauncher::with_window(window)
        .delegate(delegate)
        .configure_env(ui::theme::setup);

    // Queue the initial fetch before the event loop starts, so it runs
    // exactly once no matter how often the widget tree rebuilds.
    launcher
        .get_external_handle()
        .submit_command(cmd::LOAD_MOVIES, (), Target::Auto)
        .expect("Initial fetch");

    launcher.launch(state).expect("Application launch");
}
