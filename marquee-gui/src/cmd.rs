use druid::Selector;

use crate::data::MovieDraft;

pub const LOAD_MOVIES: Selector = Selector::new("app.load-movies");
pub const SAVE_MOVIE: Selector<MovieDraft> = Selector::new("app.save-movie");
