use crate::dom::{self, SectionIndex};
use crate::render;
use scrollscape_core::{FrameScheduler, InputEvent, InstantClock, StateDelta};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Resize,
    Load,
}

pub struct FrameContext<'a> {
    pub scheduler: FrameScheduler<InstantClock>,
    pub sections: SectionIndex,
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    light_mode: Option<bool>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scheduler: FrameScheduler<InstantClock>,
        window: web::Window,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            scheduler,
            sections: SectionIndex::default(),
            window,
            document,
            canvas,
            gpu,
            light_mode: None,
        }
    }

    /// Feed one event to the engine and perform its DOM side effects.
    pub fn dispatch(&mut self, event: InputEvent, source: Option<&web::Event>) -> StateDelta {
        let delta = self.scheduler.on_input_event(event);
        dom::apply_delta(&self.window, &self.sections, source, &delta);
        delta
    }

    /// Rescan section geometry after a resize or the document load.
    pub fn relayout(&mut self, layout: Layout) {
        let (index, sections) = dom::scan_sections(&self.window, &self.document);
        self.sections = index;
        let metrics = dom::scroll_metrics(&self.document);
        log::debug!("[dom] {:?}: {} sections", layout, sections.len());
        let event = match layout {
            Layout::Resize => InputEvent::Resize { sections, metrics },
            Layout::Load => InputEvent::Load { sections, metrics },
        };
        self.dispatch(event, None);
        dom::sync_canvas_backing_size(&self.canvas);
    }

    pub fn frame(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.scheduler.set_viewport(w as f32, h as f32);
        let cmds = self.scheduler.frame();

        if self.light_mode != Some(cmds.light_mode) {
            dom::set_light_mode(&self.document, cmds.light_mode);
            self.light_mode = Some(cmds.light_mode);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&cmds) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
