use super::{listen, SharedFrame};
use crate::dom;
use crate::frame::Layout;
use scrollscape_core::InputEvent;
use web_sys as web;

pub fn wire_scroll(ctx: &SharedFrame) {
    let document = ctx.borrow().document.clone();
    let ctx = ctx.clone();
    listen(&document, "scroll", None, move |_ev: web::Event| {
        let mut c = ctx.borrow_mut();
        let metrics = dom::scroll_metrics(&c.document);
        c.dispatch(InputEvent::Scroll { metrics }, None);
    });
}

pub fn wire_layout(ctx: &SharedFrame) {
    let window = ctx.borrow().window.clone();
    for (name, layout) in [("resize", Layout::Resize), ("load", Layout::Load)] {
        let ctx = ctx.clone();
        listen(&window, name, None, move |_ev: web::Event| {
            ctx.borrow_mut().relayout(layout);
        });
    }
}
