//! Scroll position → active scene.
//!
//! Sections are laid out once from document geometry (and again after every
//! resize/load). Each scroll tick then picks the section whose fractional
//! midpoint is nearest to the current scroll fraction. This is a
//! nearest-midpoint policy rather than containment, so a scene stays active
//! while the page is pinned slightly outside its nominal range.

use crate::constants::RANGE_EPSILON;
use crate::math::clamp01;
use crate::scene::SceneId;

/// Document scroll metrics in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Largest reachable scroll offset, floored at one pixel.
    #[inline]
    pub fn scroll_max(&self) -> f64 {
        (self.scroll_height - self.client_height).max(1.0)
    }
}

/// Layout of one scene-tagged section as measured in the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub scene: SceneId,
    /// Absolute top offset (bounding top + current scroll).
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub scene: SceneId,
    pub start: f32,
    pub end: f32,
    pub top_y: f64,
    pub bottom_y: f64,
}

impl Section {
    #[inline]
    pub fn midpoint(&self) -> f32 {
        (self.start + self.end) * 0.5
    }

    /// True when `scroll_y` lies inside the section's pixel bounds, with
    /// `tolerance` pixels of slack at the top and the bottom edge pulled in
    /// by the same amount.
    #[inline]
    pub fn contains_offset(&self, scroll_y: f64, tolerance: f64) -> bool {
        scroll_y >= self.top_y - tolerance && scroll_y <= self.bottom_y - tolerance
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActiveSceneState {
    pub scene: SceneId,
    pub progress: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    scroll_percent: f32,
    active: ActiveSceneState,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild every section's scroll-fraction range from fresh geometry.
    pub fn build_section_ranges(&mut self, geometry: &[SectionGeometry], metrics: &ScrollMetrics) {
        let scroll_max = metrics.scroll_max();
        self.sections = geometry
            .iter()
            .map(|g| {
                let h = g.height.max(1.0);
                Section {
                    scene: g.scene,
                    start: clamp01((g.top / scroll_max) as f32),
                    end: clamp01(((g.top + h) / scroll_max) as f32),
                    top_y: g.top,
                    bottom_y: g.top + h,
                }
            })
            .collect();
        log::debug!(
            "[scroll] built {} section ranges (scroll max {:.0}px)",
            self.sections.len(),
            scroll_max
        );
    }

    /// Scroll fraction in [0, 1] for the given metrics.
    pub fn compute_scroll_percent(metrics: &ScrollMetrics) -> f32 {
        clamp01((metrics.scroll_top / metrics.scroll_max()) as f32)
    }

    pub fn set_scroll_percent(&mut self, percent: f32) {
        self.scroll_percent = percent;
    }

    /// Select the section with the nearest midpoint. First in document order
    /// wins ties. No sections leaves the state untouched.
    pub fn update_active_scene(&mut self) -> Option<ActiveSceneState> {
        let p = self.scroll_percent;
        let mut best: Option<(&Section, f32)> = None;
        for section in &self.sections {
            let dist = (p - section.midpoint()).abs();
            match best {
                Some((_, bd)) if dist >= bd => {}
                _ => best = Some((section, dist)),
            }
        }
        let (section, _) = best?;
        let denom = (section.end - section.start).max(RANGE_EPSILON);
        let next = ActiveSceneState {
            scene: section.scene,
            progress: clamp01((p - section.start) / denom),
        };
        if next.scene != self.active.scene {
            log::debug!("[scroll] active scene {} -> {}", self.active.scene, next.scene);
        }
        self.active = next;
        Some(next)
    }

    /// Recompute the scroll fraction from metrics and refresh the active scene.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> Option<ActiveSceneState> {
        self.scroll_percent = Self::compute_scroll_percent(metrics);
        self.update_active_scene()
    }

    pub fn range_for_scene(&self, scene: SceneId) -> Option<&Section> {
        self.sections.iter().find(|s| s.scene == scene)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn scroll_percent(&self) -> f32 {
        self.scroll_percent
    }

    pub fn active(&self) -> ActiveSceneState {
        self.active
    }

    pub fn active_scene(&self) -> SceneId {
        self.active.scene
    }
}
