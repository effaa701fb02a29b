use crate::constants::*;
use scrollscape_core::{SceneId, ScrollMetrics, SectionClasses, SectionGeometry, StateDelta};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scene-tagged sections in document order, as last scanned.
#[derive(Default)]
pub struct SectionIndex {
    entries: Vec<(SceneId, web::Element)>,
}

impl SectionIndex {
    /// First section element tagged with `scene`.
    pub fn element(&self, scene: SceneId) -> Option<&web::Element> {
        self.entries.iter().find(|(s, _)| *s == scene).map(|(_, el)| el)
    }
}

/// Scan every `section[data-scene]` and measure it. Sections with an unknown
/// scene id are skipped.
pub fn scan_sections(window: &web::Window, document: &web::Document) -> (SectionIndex, Vec<SectionGeometry>) {
    let mut index = SectionIndex::default();
    let mut geometry = Vec::new();
    let Ok(list) = document.query_selector_all(SECTION_SELECTOR) else {
        return (index, geometry);
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    for i in 0..list.length() {
        let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let raw = el.get_attribute(SCENE_ATTR).unwrap_or_default();
        let scene = match raw.parse::<SceneId>() {
            Ok(scene) => scene,
            Err(e) => {
                log::warn!("[dom] skipping section: {}", e);
                continue;
            }
        };
        let rect = el.get_bounding_client_rect();
        geometry.push(SectionGeometry {
            scene,
            top: rect.top() + scroll_y,
            height: rect.height(),
        });
        index.entries.push((scene, el));
    }
    (index, geometry)
}

/// Document scroll metrics, reading the body's offset when the root
/// element reports none.
pub fn scroll_metrics(document: &web::Document) -> ScrollMetrics {
    let root = document.document_element();
    let body = document.body();
    let pick = |from_root: Option<f64>, from_body: Option<f64>| match from_root {
        Some(v) if v != 0.0 => v,
        _ => from_body.unwrap_or(0.0),
    };
    ScrollMetrics {
        scroll_top: pick(
            root.as_ref().map(|r| r.scroll_top() as f64),
            body.as_ref().map(|b| b.scroll_top() as f64),
        ),
        scroll_height: pick(
            root.as_ref().map(|r| r.scroll_height() as f64),
            body.as_ref().map(|b| b.scroll_height() as f64),
        ),
        client_height: root.as_ref().map(|r| r.client_height() as f64).unwrap_or(0.0),
    }
}

pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn is_small_viewport(window: &web::Window) -> bool {
    matches!(window.match_media(SMALL_VIEWPORT_QUERY), Ok(Some(mq)) if mq.matches())
}

fn toggle(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

pub fn write_section_classes(index: &SectionIndex, classes: &SectionClasses) {
    let Some(el) = index.element(classes.scene) else {
        return;
    };
    toggle(el, CLASS_LOCKABLE, classes.lockable);
    toggle(el, CLASS_PINNED, classes.pinned);
    toggle(el, CLASS_REVEALED, classes.revealed);
    toggle(el, CLASS_UNREVEALED, classes.unrevealed);
}

pub fn set_light_mode(document: &web::Document, on: bool) {
    if let Some(body) = document.body() {
        toggle(&body, CLASS_LIGHT_MODE, on);
    }
}

/// Perform the DOM side effects of one engine event.
pub fn apply_delta(window: &web::Window, index: &SectionIndex, event: Option<&web::Event>, delta: &StateDelta) {
    if delta.prevent_default {
        if let Some(ev) = event {
            ev.prevent_default();
        }
    }
    for classes in &delta.classes {
        write_section_classes(index, classes);
    }
    if let Some(y) = delta.scroll_to {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
