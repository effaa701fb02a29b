use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

mod gesture;
mod pointer;
mod scroll;

pub type SharedFrame = Rc<RefCell<FrameContext<'static>>>;

/// Attach every document/window listener the engine consumes.
pub fn wire_all(ctx: &SharedFrame) {
    scroll::wire_scroll(ctx);
    scroll::wire_layout(ctx);
    gesture::wire_wheel(ctx);
    gesture::wire_touch(ctx);
    pointer::wire_mousemove(ctx);
}

/// Register `handler` for `name` on `target`. `passive` of `None` keeps the
/// browser default.
pub(crate) fn listen<E>(
    target: &web::EventTarget,
    name: &str,
    passive: Option<bool>,
    handler: impl FnMut(E) + 'static,
) where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let res = match passive {
        Some(p) => {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(p);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
        }
        None => target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()),
    };
    if let Err(e) = res {
        log::warn!("[events] failed to add {} listener: {:?}", name, e);
    }
    closure.forget();
}
