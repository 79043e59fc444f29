use druid::{
    widget::{Label, LineBreaking},
    Data, Widget, WidgetExt,
};

use crate::error::Error;

pub fn loading_widget<T: Data>() -> impl Widget<T> {
    Label::new("Loading...").center()
}

pub fn empty_widget<T: Data>() -> impl Widget<T> {
    Label::new("Found no movies.").center()
}

pub fn error_widget() -> impl Widget<Error> {
    Label::dynamic(|err: &Error, _| err.to_string())
        .with_line_break_mode(LineBreaking::WordWrap)
        .center()
}
