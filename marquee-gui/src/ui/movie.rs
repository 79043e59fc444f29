use druid::{
    im::Vector,
    widget::{CrossAxisAlignment, Either, Flex, LineBreaking, List, RawLabel, Scroll},
    Widget, WidgetExt,
};

use crate::data::Movie;

use super::{theme, utils};

/// The resolved collection.  The empty case is special-cased here so that a
/// store with no records reads as a message, not as a blank pane.
pub fn list_widget() -> impl Widget<Vector<Movie>> {
    Either::new(
        |movies: &Vector<Movie>, _| movies.is_empty(),
        utils::empty_widget(),
        Scroll::new(List::new(movie_widget)).vertical(),
    )
}

fn movie_widget() -> impl Widget<Movie> {
    let title = RawLabel::new()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(Movie::title);
    let opening_text = RawLabel::new()
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(Movie::opening_text);
    let release_date = RawLabel::new()
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .lens(Movie::release_date);

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(title)
        .with_spacer(theme::grid(0.5))
        .with_child(opening_text)
        .with_spacer(theme::grid(0.5))
        .with_child(release_date)
        .padding(theme::grid(1.0))
}
