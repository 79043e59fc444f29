use druid::{AppDelegate, Command, DelegateCtx, Env, Handled, Target, WindowId};
use threadpool::ThreadPool;

use crate::{cmd, data::AppState, webapi::WebApi};

pub struct Delegate {
    main_window: Option<WindowId>,
    save_pool: ThreadPool,
}

impl Delegate {
    pub fn with_main(main_window: WindowId) -> Self {
        const MAX_SAVE_THREADS: usize = 2;

        Self {
            main_window: Some(main_window),
            save_pool: ThreadPool::with_name("movie_saving".into(), MAX_SAVE_THREADS),
        }
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        _ctx: &mut DelegateCtx,
        _target: Target,
        cmd: &Command,
        _data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(draft) = cmd.get(cmd::SAVE_MOVIE) {
            // Fire-and-forget: the outcome is logged, the displayed list is
            // left alone until the user fetches again.
            self.save_pool.execute({
                let draft = draft.clone();
                move || match WebApi::global().save_movie(&draft) {
                    Ok(()) => log::info!("saved movie {:?}", draft.title),
                    Err(err) => log::warn!("failed to save movie: {err}"),
                }
            });
            Handled::Yes
        } else {
            Handled::No
        }
    }

    fn window_removed(
        &mut self,
        id: WindowId,
        _data: &mut AppState,
        _env: &Env,
        _ctx: &mut DelegateCtx,
    ) {
        if self.main_window == Some(id) {
            self.main_window.take();
        }
    }
}
