pub mod movie;
pub mod promise;

pub use crate::data::{
    movie::{Movie, MovieDraft},
    promise::{Promise, PromiseState},
};

use druid::{im::Vector, Data, Lens};

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub movies: Promise<Vector<Movie>>,
    pub draft: MovieDraft,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            movies: Promise::Empty,
            draft: MovieDraft::default(),
        }
    }
}
