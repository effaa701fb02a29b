use super::{listen, SharedFrame};
use scrollscape_core::InputEvent;
use web_sys as web;

pub fn wire_mousemove(ctx: &SharedFrame) {
    let document = ctx.borrow().document.clone();
    let ctx = ctx.clone();
    listen(&document, "mousemove", None, move |ev: web::MouseEvent| {
        let mut c = ctx.borrow_mut();
        let width = c.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let height = c.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let event = InputEvent::pointer(ev.client_x() as f64, ev.client_y() as f64, width, height);
        c.dispatch(event, None);
    });
}
