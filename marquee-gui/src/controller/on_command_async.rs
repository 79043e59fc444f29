use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use druid::{
    widget::{prelude::*, Controller},
    Selector, SingleUse, Target,
};

type AsyncCmdPre<T, U> = Box<dyn Fn(&mut EventCtx, &mut T, U)>;
type AsyncCmdReq<U, V> = Arc<dyn Fn(U) -> V + Sync + Send + 'static>;
type AsyncCmdRes<T, U, V> = Box<dyn Fn(&mut EventCtx, &mut T, (U, V))>;

/// Runs a request function on a background thread whenever `selector`
/// arrives, and feeds the result back into the widget tree as a command.
/// The preflight closure runs on the UI thread before the thread is spawned,
/// the response closure after its result arrives.
pub struct OnCommandAsync<T, U, V> {
    selector: Selector<U>,
    preflight_fn: AsyncCmdPre<T, U>,
    request_fn: AsyncCmdReq<U, V>,
    response_fn: AsyncCmdRes<T, U, V>,
    thread: Option<JoinHandle<()>>,
}

impl<T, U, V> OnCommandAsync<T, U, V>
where
    U: Send + Clone + 'static,
    V: Send + 'static,
{
    const RESPONSE: Selector<SingleUse<(U, V)>> = Selector::new("on_command_async.response");

    pub fn new(
        selector: Selector<U>,
        request_fn: impl Fn(U) -> V + Sync + Send + 'static,
        preflight_fn: impl Fn(&mut EventCtx, &mut T, U) + 'static,
        response_fn: impl Fn(&mut EventCtx, &mut T, (U, V)) + 'static,
    ) -> Self {
        Self {
            selector,
            preflight_fn: Box::new(preflight_fn),
            request_fn: Arc::new(request_fn),
            response_fn: Box::new(response_fn),
            thread: None,
        }
    }
}

impl<T, U, V, W> Controller<T, W> for OnCommandAsync<T, U, V>
where
    T: Data,
    U: Send + Clone + 'static,
    V: Send + 'static,
    W: Widget<T>,
{
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::Command(cmd) if cmd.is(self.selector) => {
                let req = cmd.get_unchecked(self.selector);

                (self.preflight_fn)(ctx, data, req.to_owned());

                // Requests are not mutually exclusive; a new one may overlap
                // an unfinished one, and the responses apply as they arrive.
                let old_thread = self.thread.replace(thread::spawn({
                    let req_fn = self.request_fn.clone();
                    let req = req.to_owned();
                    let sink = ctx.get_external_handle();
                    let self_id = ctx.widget_id();

                    move || {
                        let res = req_fn(req.clone());
                        sink.submit_command(
                            Self::RESPONSE,
                            SingleUse::new((req, res)),
                            Target::Widget(self_id),
                        )
                        .unwrap();
                    }
                }));
                if old_thread.is_some() {
                    log::warn!("async action pending");
                }
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(Self::RESPONSE) => {
                let res = cmd.get_unchecked(Self::RESPONSE).take().unwrap();
                (self.response_fn)(ctx, data, res);
                self.thread.take();
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }
}
