use super::{listen, SharedFrame};
use crate::dom;
use scrollscape_core::InputEvent;
use web_sys as web;

/// Wheel deltas may be captured by the scroll lock, so the listener must be
/// able to cancel them.
pub fn wire_wheel(ctx: &SharedFrame) {
    let document = ctx.borrow().document.clone();
    let ctx = ctx.clone();
    listen(&document, "wheel", Some(false), move |ev: web::WheelEvent| {
        let mut c = ctx.borrow_mut();
        let scroll_y = dom::scroll_y(&c.window);
        let event = InputEvent::Wheel {
            delta: ev.delta_y() as f32,
            scroll_y,
        };
        let source: &web::Event = ev.as_ref();
        c.dispatch(event, Some(source));
    });
}

fn first_touch_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_y() as f64)
}

pub fn wire_touch(ctx: &SharedFrame) {
    let document = ctx.borrow().document.clone();
    {
        let ctx = ctx.clone();
        listen(&document, "touchstart", Some(true), move |ev: web::TouchEvent| {
            if let Some(y) = first_touch_y(&ev) {
                ctx.borrow_mut().dispatch(InputEvent::TouchStart { y }, None);
            }
        });
    }
    let ctx = ctx.clone();
    listen(&document, "touchmove", Some(false), move |ev: web::TouchEvent| {
        let Some(y) = first_touch_y(&ev) else {
            return;
        };
        let mut c = ctx.borrow_mut();
        let scroll_y = dom::scroll_y(&c.window);
        let source: &web::Event = ev.as_ref();
        c.dispatch(InputEvent::TouchMove { y, scroll_y }, Some(source));
    });
}
