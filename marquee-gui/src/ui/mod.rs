pub mod form;
pub mod movie;
pub mod theme;
pub mod utils;

use druid::{
    widget::{Button, CrossAxisAlignment, Flex},
    Widget, WidgetExt, WindowDesc,
};

use crate::{
    cmd,
    data::AppState,
    webapi::WebApi,
    widget::{Async, MyWidgetExt},
};

use self::utils::{empty_widget, error_widget, loading_widget};

pub fn main_window() -> WindowDesc<AppState> {
    WindowDesc::new(root_widget())
        .title("Marquee")
        .window_size((theme::grid(60.0), theme::grid(80.0)))
        .with_min_size((theme::grid(40.0), theme::grid(40.0)))
}

fn root_widget() -> impl Widget<AppState> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(form::draft_widget().padding(theme::grid(2.0)))
        .with_child(fetch_button())
        .with_flex_child(content_widget().padding(theme::grid(2.0)), 1.0)
}

fn fetch_button() -> impl Widget<AppState> {
    Button::new("Fetch Movies")
        .on_click(|ctx, _, _| ctx.submit_command(cmd::LOAD_MOVIES))
        .center()
}

/// Content pane, driven by the state of the movies promise.  Entering the
/// loading state hides any stale list or error until the fetch finishes.
fn content_widget() -> impl Widget<AppState> {
    Async::new(empty_widget, loading_widget, movie::list_widget, error_widget)
        .lens(AppState::movies)
        .on_command_async(
            cmd::LOAD_MOVIES,
            |_| WebApi::global().get_movies(),
            |_, data, d| data.movies.defer(d),
            |_, data, (_, res)| data.movies.resolve_or_reject(res),
        )
}
