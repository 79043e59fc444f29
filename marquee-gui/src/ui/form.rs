use druid::{
    widget::{Button, CrossAxisAlignment, Flex, TextBox},
    LensExt, Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{AppState, MovieDraft},
};

use super::theme;

/// The add-movie form.  Field contents pass through unvalidated; the store
/// accepts whatever the user typed.
pub fn draft_widget() -> impl Widget<AppState> {
    let title = TextBox::new()
        .with_placeholder("Title")
        .expand_width()
        .lens(AppState::draft.then(MovieDraft::title));
    let opening_text = TextBox::new()
        .with_placeholder("Opening Text")
        .expand_width()
        .lens(AppState::draft.then(MovieDraft::opening_text));
    let release_date = TextBox::new()
        .with_placeholder("Release Date")
        .expand_width()
        .lens(AppState::draft.then(MovieDraft::release_date));

    let submit = Button::new("Add Movie").on_click(|ctx, data: &mut AppState, _| {
        ctx.submit_command(cmd::SAVE_MOVIE.with(data.draft.clone()));
    });

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(title)
        .with_spacer(theme::grid(1.0))
        .with_child(opening_text)
        .with_spacer(theme::grid(1.0))
        .with_child(release_date)
        .with_spacer(theme::grid(1.5))
        .with_child(submit)
}
