mod promise;

use druid::{widget::ControllerHost, Data, EventCtx, Selector, Widget};

pub use promise::Async;

use crate::controller::OnCommandAsync;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn on_command_async<U, V>(
        self,
        selector: Selector<U>,
        request: impl Fn(U) -> V + Sync + Send + 'static,
        preflight: impl Fn(&mut EventCtx, &mut T, U) + 'static,
        response: impl Fn(&mut EventCtx, &mut T, (U, V)) + 'static,
    ) -> ControllerHost<Self, OnCommandAsync<T, U, V>>
    where
        U: Send + Clone + 'static,
        V: Send + 'static,
    {
        ControllerHost::new(
            self,
            OnCommandAsync::new(selector, request, preflight, response),
        )
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
