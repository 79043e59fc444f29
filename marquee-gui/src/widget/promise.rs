use druid::{widget::prelude::*, Point, WidgetExt, WidgetPod};

use crate::data::{Promise, PromiseState};

type Maker<T> = Box<dyn Fn() -> Box<dyn Widget<T>>>;

/// Shows one of four sub-widgets depending on the state of a `Promise`,
/// rebuilding the active one whenever the state changes.
pub struct Async<T, D, E> {
    emp_maker: Maker<()>,
    def_maker: Maker<D>,
    res_maker: Maker<T>,
    err_maker: Maker<E>,
    widget: AsyncWidget<T, D, E>,
}

enum AsyncWidget<T, D, E> {
    Empty(WidgetPod<(), Box<dyn Widget<()>>>),
    Deferred(WidgetPod<D, Box<dyn Widget<D>>>),
    Resolved(WidgetPod<T, Box<dyn Widget<T>>>),
    Rejected(WidgetPod<E, Box<dyn Widget<E>>>),
}

impl<T: Data, D: Data, E: Data> Async<T, D, E> {
    pub fn new<WN, WD, WT, WE>(
        emp_maker: impl Fn() -> WN + 'static,
        def_maker: impl Fn() -> WD + 'static,
        res_maker: impl Fn() -> WT + 'static,
        err_maker: impl Fn() -> WE + 'static,
    ) -> Self
    where
        WN: Widget<()> + 'static,
        WD: Widget<D> + 'static,
        WT: Widget<T> + 'static,
        WE: Widget<E> + 'static,
    {
        let emp_maker: Maker<()> = Box::new(move || emp_maker().boxed());
        let widget = AsyncWidget::Empty(WidgetPod::new(emp_maker()));
        Self {
            emp_maker,
            def_maker: Box::new(move || def_maker().boxed()),
            res_maker: Box::new(move || res_maker().boxed()),
            err_maker: Box::new(move || err_maker().boxed()),
            widget,
        }
    }

    fn rebuild_widget(&mut self, state: PromiseState) {
        self.widget = match state {
            PromiseState::Empty => AsyncWidget::Empty(WidgetPod::new((self.emp_maker)())),
            PromiseState::Deferred => AsyncWidget::Deferred(WidgetPod::new((self.def_maker)())),
            PromiseState::Resolved => AsyncWidget::Resolved(WidgetPod::new((self.res_maker)())),
            PromiseState::Rejected => AsyncWidget::Rejected(WidgetPod::new((self.err_maker)())),
        };
    }
}

impl<T: Data, D: Data, E: Data> Widget<Promise<T, D, E>> for Async<T, D, E> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Promise<T, D, E>, env: &Env) {
        if data.state() == self.widget.state() {
            match (&mut self.widget, data) {
                (AsyncWidget::Empty(w), _) => w.event(ctx, event, &mut (), env),
                (AsyncWidget::Deferred(w), Promise::Deferred(d)) => w.event(ctx, event, d, env),
                (AsyncWidget::Resolved(w), Promise::Resolved(o)) => w.event(ctx, event, o, env),
                (AsyncWidget::Rejected(w), Promise::Rejected(e)) => w.event(ctx, event, e, env),
                _ => unreachable!(),
            }
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &Promise<T, D, E>,
        env: &Env,
    ) {
        if data.state() != self.widget.state() {
            // Possible when a lifecycle pass follows an event that changed
            // the promise, or on WidgetAdded.
            self.rebuild_widget(data.state());
        }
        match (&mut self.widget, data) {
            (AsyncWidget::Empty(w), _) => w.lifecycle(ctx, event, &(), env),
            (AsyncWidget::Deferred(w), Promise::Deferred(d)) => w.lifecycle(ctx, event, d, env),
            (AsyncWidget::Resolved(w), Promise::Resolved(o)) => w.lifecycle(ctx, event, o, env),
            (AsyncWidget::Rejected(w), Promise::Rejected(e)) => w.lifecycle(ctx, event, e, env),
            _ => unreachable!(),
        }
    }

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old_data: &Promise<T, D, E>,
        data: &Promise<T, D, E>,
        env: &Env,
    ) {
        if old_data.state() != data.state() {
            self.rebuild_widget(data.state());
            ctx.children_changed();
        } else {
            match (&mut self.widget, data) {
                (AsyncWidget::Empty(w), _) => w.update(ctx, &(), env),
                (AsyncWidget::Deferred(w), Promise::Deferred(d)) => w.update(ctx, d, env),
                (AsyncWidget::Resolved(w), Promise::Resolved(o)) => w.update(ctx, o, env),
                (AsyncWidget::Rejected(w), Promise::Rejected(e)) => w.update(ctx, e, env),
                _ => unreachable!(),
            }
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &Promise<T, D, E>,
        env: &Env,
    ) -> Size {
        match (&mut self.widget, data) {
            (AsyncWidget::Empty(w), _) => {
                let size = w.layout(ctx, bc, &(), env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }
            (AsyncWidget::Deferred(w), Promise::Deferred(d)) => {
                let size = w.layout(ctx, bc, d, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }
            (AsyncWidget::Resolved(w), Promise::Resolved(o)) => {
                let size = w.layout(ctx, bc, o, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }
            (AsyncWidget::Rejected(w), Promise::Rejected(e)) => {
                let size = w.layout(ctx, bc, e, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }
            _ => Size::ZERO,
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Promise<T, D, E>, env: &Env) {
        match (&mut self.widget, data) {
            (AsyncWidget::Empty(w), _) => w.paint(ctx, &(), env),
            (AsyncWidget::Deferred(w), Promise::Deferred(d)) => w.paint(ctx, d, env),
            (AsyncWidget::Resolved(w), Promise::Resolved(o)) => w.paint(ctx, o, env),
            (AsyncWidget::Rejected(w), Promise::Rejected(e)) => w.paint(ctx, e, env),
            _ => {}
        }
    }
}

impl<T, D, E> AsyncWidget<T, D, E> {
    fn state(&self) -> PromiseState {
        match self {
            Self::Empty(_) => PromiseState::Empty,
            Self::Deferred(_) => PromiseState::Deferred,
            Self::Resolved(_) => PromiseState::Resolved,
            Self::Rejected(_) => PromiseState::Rejected,
        }
    }
}
