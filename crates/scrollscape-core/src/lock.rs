//! Scroll lock: pins the page on a lockable section and redirects wheel and
//! touch deltas into that scene's progress until a release threshold is hit.
//!
//! Two states, `Free` and `Locked { scene, pin_y }`. Engagement requires the
//! active scene to be lockable, the page offset to sit inside the section's
//! pixel bounds and the gesture to push progress toward an unreached end.
//! Release happens after a delta carries progress to `RELEASE_AT` going down
//! or to `RELEASE_FLOOR` going up.

use crate::constants::{
    PIN_DRIFT_TOLERANCE_PX, PROGRESS_MAX, RELEASE_AT, RELEASE_FLOOR, REVEAL_AT,
    SECTION_EDGE_TOLERANCE_PX, TOUCH_SPEED,
};
use crate::scene::SceneId;
use crate::tracker::{ScrollTracker, Section};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScrollLock {
    #[default]
    Free,
    Locked { scene: SceneId, pin_y: f64 },
}

impl ScrollLock {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, ScrollLock::Locked { .. })
    }

    #[inline]
    pub fn scene(&self) -> Option<SceneId> {
        match self {
            ScrollLock::Locked { scene, .. } => Some(*scene),
            ScrollLock::Free => None,
        }
    }

    #[inline]
    pub fn pin_y(&self) -> Option<f64> {
        match self {
            ScrollLock::Locked { pin_y, .. } => Some(*pin_y),
            ScrollLock::Free => None,
        }
    }
}

/// Per-scene progress for the lockable scenes, each kept in [0, PROGRESS_MAX].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneProgress([f32; 3]);

impl SceneProgress {
    /// Progress of `scene`; non-lockable scenes always read 0.
    pub fn get(&self, scene: SceneId) -> f32 {
        scene.lockable_index().map(|i| self.0[i]).unwrap_or(0.0)
    }

    pub fn set(&mut self, scene: SceneId, value: f32) {
        if let Some(i) = scene.lockable_index() {
            self.0[i] = value.clamp(0.0, PROGRESS_MAX);
        }
    }

    pub fn add(&mut self, scene: SceneId, delta: f32) -> f32 {
        self.set(scene, self.get(scene) + delta);
        self.get(scene)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureSource {
    Wheel,
    Touch,
}

/// Vertical scroll intent. Positive delta means "scroll down".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub source: GestureSource,
    pub delta: f32,
}

/// CSS hook state for one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionClasses {
    pub scene: SceneId,
    pub lockable: bool,
    pub pinned: bool,
    pub revealed: bool,
    pub unrevealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockTransition {
    Engaged(SceneId),
    Released(SceneId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureOutcome {
    /// Default browser scrolling must be suppressed.
    pub captured: bool,
    pub scroll_to: Option<f64>,
    pub classes: SmallVec<[SectionClasses; 3]>,
    pub transitions: SmallVec<[LockTransition; 2]>,
}

/// What a native scroll tick means while the lock may be held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTick {
    /// Not locked; scroll tracking proceeds.
    Free,
    /// Locked and within tolerance of the pin.
    Held,
    /// Locked and drifted; the page must be moved back to this offset.
    Repin(f64),
}

#[derive(Clone, Debug)]
pub struct ScrollLockController {
    lock: ScrollLock,
    progress: SceneProgress,
    wheel_speed: f32,
    touch_anchor: Option<f64>,
}

impl ScrollLockController {
    pub fn new(wheel_speed: f32) -> Self {
        Self {
            lock: ScrollLock::Free,
            progress: SceneProgress::default(),
            wheel_speed,
            touch_anchor: None,
        }
    }

    pub fn lock(&self) -> ScrollLock {
        self.lock
    }

    pub fn progress(&self) -> &SceneProgress {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut SceneProgress {
        &mut self.progress
    }

    fn speed_for(&self, source: GestureSource) -> f32 {
        match source {
            GestureSource::Wheel => self.wheel_speed,
            GestureSource::Touch => TOUCH_SPEED,
        }
    }

    /// Whether a gesture of `delta` on `scene` at page offset `scroll_y`
    /// should be captured by the lock.
    pub fn should_capture(&self, scene: SceneId, delta: f32, scroll_y: f64, section: Option<&Section>) -> bool {
        if !scene.is_lockable() {
            return false;
        }
        let Some(section) = section else {
            return false;
        };
        if !section.contains_offset(scroll_y, SECTION_EDGE_TOLERANCE_PX) {
            return false;
        }
        if self.lock.scene() == Some(scene) {
            return true;
        }
        let p = self.progress.get(scene);
        (delta > 0.0 && p < RELEASE_AT) || (delta < 0.0 && p > RELEASE_FLOOR)
    }

    /// Apply one wheel/touch gesture. While locked every gesture is consumed
    /// by the locked scene; otherwise `active_scene` may engage the lock.
    pub fn on_gesture(
        &mut self,
        gesture: Gesture,
        active_scene: SceneId,
        scroll_y: f64,
        tracker: &ScrollTracker,
    ) -> GestureOutcome {
        let mut out = GestureOutcome::default();
        let scene = match self.lock {
            ScrollLock::Locked { scene, .. } => scene,
            ScrollLock::Free => {
                let section = tracker.range_for_scene(active_scene);
                if !self.should_capture(active_scene, gesture.delta, scroll_y, section) {
                    return out;
                }
                self.engage(active_scene, section.map(|s| s.top_y).unwrap_or(scroll_y));
                out.transitions.push(LockTransition::Engaged(active_scene));
                out.classes.extend(self.all_section_classes());
                active_scene
            }
        };
        out.captured = true;

        let delta = gesture.delta * self.speed_for(gesture.source);
        let p = self.progress.add(scene, delta);
        out.classes.push(self.section_classes(scene));
        out.scroll_to = self.lock.pin_y();

        let release = (p >= RELEASE_AT && gesture.delta > 0.0) || (p <= RELEASE_FLOOR && gesture.delta < 0.0);
        if release {
            self.release();
            out.transitions.push(LockTransition::Released(scene));
            out.classes.extend(self.all_section_classes());
        }
        out
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.touch_anchor = Some(y);
    }

    /// Touch moves become gestures of `anchor - y`; the anchor follows the
    /// finger only after a captured move.
    pub fn on_touch_move(
        &mut self,
        y: f64,
        active_scene: SceneId,
        scroll_y: f64,
        tracker: &ScrollTracker,
    ) -> GestureOutcome {
        let Some(anchor) = self.touch_anchor else {
            self.touch_anchor = Some(y);
            return GestureOutcome::default();
        };
        let gesture = Gesture {
            source: GestureSource::Touch,
            delta: (anchor - y) as f32,
        };
        let out = self.on_gesture(gesture, active_scene, scroll_y, tracker);
        if out.captured {
            self.touch_anchor = Some(y);
        }
        out
    }

    /// Classify a native scroll tick at page offset `scroll_y`.
    pub fn on_scroll(&self, scroll_y: f64) -> ScrollTick {
        match self.lock {
            ScrollLock::Free => ScrollTick::Free,
            ScrollLock::Locked { pin_y, .. } => {
                if (scroll_y - pin_y).abs() > PIN_DRIFT_TOLERANCE_PX {
                    ScrollTick::Repin(pin_y)
                } else {
                    ScrollTick::Held
                }
            }
        }
    }

    fn engage(&mut self, scene: SceneId, pin_y: f64) {
        log::info!("[lock] engage {} pinned at {:.0}px", scene, pin_y);
        self.lock = ScrollLock::Locked { scene, pin_y };
    }

    fn release(&mut self) {
        if let Some(scene) = self.lock.scene() {
            log::info!(
                "[lock] release {} at progress {:.3}",
                scene,
                self.progress.get(scene)
            );
        }
        self.lock = ScrollLock::Free;
    }

    pub fn section_classes(&self, scene: SceneId) -> SectionClasses {
        let lockable = scene.is_lockable();
        let revealed = self.progress.get(scene) >= REVEAL_AT;
        SectionClasses {
            scene,
            lockable,
            pinned: self.lock.scene() == Some(scene),
            revealed,
            unrevealed: lockable && !revealed,
        }
    }

    pub fn all_section_classes(&self) -> SmallVec<[SectionClasses; 3]> {
        SceneId::LOCKABLE
            .iter()
            .map(|s| self.section_classes(*s))
            .collect()
    }
}
