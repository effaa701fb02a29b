//! Event application and the per-frame step.
//!
//! All mutable engine state lives in a [`SceneContext`]. Host events are
//! applied one at a time through [`SceneContext::on_input_event`], which
//! returns the DOM side effects the host must perform. Once per display
//! refresh the host calls [`FrameScheduler::frame`] and draws the returned
//! [`RenderCommands`].

use crate::animators::{self, intro, AnimContext};
use crate::blend::SceneBlender;
use crate::lock::{Gesture, GestureOutcome, GestureSource, LockTransition, ScrollLockController, ScrollTick, SectionClasses};
use crate::profile::ViewportProfile;
use crate::registry::{DrawItem, Fog, SceneRegistry};
use crate::state::{Camera, CameraRig};
use crate::tracker::{ActiveSceneState, ScrollMetrics, ScrollTracker, SectionGeometry};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Source of elapsed time in seconds.
pub trait Clock {
    fn elapsed(&self) -> f32;
}

/// Wall clock started at construction.
pub struct InstantClock {
    start: instant::Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    seconds: f32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.seconds += dt.max(0.0);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f32 {
        self.seconds
    }
}

/// Host input, already reduced to the values the engine needs.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Native document scroll.
    Scroll { metrics: ScrollMetrics },
    /// Wheel delta in pixels (positive = down) at page offset `scroll_y`.
    Wheel { delta: f32, scroll_y: f64 },
    TouchStart { y: f64 },
    /// Finger at client `y` while the page sits at `scroll_y`.
    TouchMove { y: f64, scroll_y: f64 },
    /// Pointer normalised to [-0.5, 0.5] on both axes.
    PointerMove { x: f32, y: f32 },
    /// Viewport resize with fresh section geometry.
    Resize {
        sections: Vec<SectionGeometry>,
        metrics: ScrollMetrics,
    },
    /// Document load with fresh section geometry.
    Load {
        sections: Vec<SectionGeometry>,
        metrics: ScrollMetrics,
    },
}

impl InputEvent {
    /// Pointer event from client coordinates and the window's inner size.
    pub fn pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        InputEvent::PointerMove {
            x: (client_x / width.max(1.0) - 0.5) as f32,
            y: (client_y / height.max(1.0) - 0.5) as f32,
        }
    }
}

/// DOM side effects of one applied event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateDelta {
    /// Suppress the browser's default handling of the event.
    pub prevent_default: bool,
    /// Force the page to this vertical offset.
    pub scroll_to: Option<f64>,
    /// Section class states to write, in order.
    pub classes: SmallVec<[SectionClasses; 3]>,
    pub transitions: SmallVec<[LockTransition; 2]>,
    /// Active scene after the event, when it was recomputed.
    pub active: Option<ActiveSceneState>,
}

impl From<GestureOutcome> for StateDelta {
    fn from(out: GestureOutcome) -> Self {
        Self {
            prevent_default: out.captured,
            scroll_to: out.scroll_to,
            classes: out.classes,
            transitions: out.transitions,
            active: None,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct RenderCommands {
    pub clear_color: Vec3,
    pub exposure: f32,
    pub fog: Fog,
    pub camera: Camera,
    /// Body-level `light-mode` class state.
    pub light_mode: bool,
    pub draw_items: Vec<DrawItem>,
}

pub struct SceneContext {
    pub tracker: ScrollTracker,
    pub lock: ScrollLockController,
    pub blender: SceneBlender,
    pub pointer: Vec2,
    pub camera: CameraRig,
    pub profile: ViewportProfile,
    pub rng: StdRng,
}

impl SceneContext {
    pub fn new(profile: ViewportProfile, seed: u64) -> Self {
        Self {
            tracker: ScrollTracker::new(),
            lock: ScrollLockController::new(profile.wheel_speed),
            blender: SceneBlender::new(),
            pointer: Vec2::ZERO,
            camera: CameraRig::default(),
            profile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Apply one host event atomically.
    pub fn on_input_event(&mut self, event: InputEvent) -> StateDelta {
        match event {
            InputEvent::Scroll { metrics } => {
                let mut delta = StateDelta::default();
                match self.lock.on_scroll(metrics.scroll_top) {
                    ScrollTick::Free => delta.active = self.tracker.on_scroll(&metrics),
                    ScrollTick::Held => {}
                    ScrollTick::Repin(y) => delta.scroll_to = Some(y),
                }
                delta
            }
            InputEvent::Wheel { delta, scroll_y } => {
                let gesture = Gesture {
                    source: GestureSource::Wheel,
                    delta,
                };
                let active = self.tracker.active_scene();
                self.lock.on_gesture(gesture, active, scroll_y, &self.tracker).into()
            }
            InputEvent::TouchStart { y } => {
                self.lock.on_touch_start(y);
                StateDelta::default()
            }
            InputEvent::TouchMove { y, scroll_y } => {
                let active = self.tracker.active_scene();
                self.lock.on_touch_move(y, active, scroll_y, &self.tracker).into()
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(x, y);
                StateDelta::default()
            }
            InputEvent::Resize { sections, metrics } => {
                self.tracker.build_section_ranges(&sections, &metrics);
                StateDelta {
                    active: self.tracker.update_active_scene(),
                    classes: self.lock.all_section_classes(),
                    ..StateDelta::default()
                }
            }
            InputEvent::Load { sections, metrics } => {
                self.tracker.build_section_ranges(&sections, &metrics);
                StateDelta {
                    active: self.tracker.on_scroll(&metrics),
                    classes: self.lock.all_section_classes(),
                    ..StateDelta::default()
                }
            }
        }
    }
}

/// One frame of the engine: environment and fades, idle motion, the active
/// animator and camera easing, in that order.
pub fn tick(ctx: &mut SceneContext, registry: &mut SceneRegistry, elapsed: f32) -> RenderCommands {
    let active = ctx.tracker.active();
    let anim = AnimContext {
        elapsed,
        pointer: ctx.pointer,
        profile: &ctx.profile,
    };

    let env = ctx.blender.update(active.scene, registry);
    intro::update_idle(registry, &anim);

    let target = animators::animate(
        active,
        ctx.tracker.scroll_percent(),
        ctx.lock.progress(),
        registry,
        &anim,
        &mut ctx.rng,
    );
    ctx.camera.ease_toward(&target);

    RenderCommands {
        clear_color: env.clear_color,
        exposure: env.exposure,
        fog: env.fog,
        camera: ctx.camera.camera.clone(),
        light_mode: env.light_mode,
        draw_items: registry.draw_items(),
    }
}

/// Owns the engine state, the scene and a clock, and steps them together.
pub struct FrameScheduler<C: Clock> {
    ctx: SceneContext,
    registry: SceneRegistry,
    clock: C,
    frames: u64,
}

impl<C: Clock> FrameScheduler<C> {
    pub fn new(ctx: SceneContext, registry: SceneRegistry, clock: C) -> Self {
        Self {
            ctx,
            registry,
            clock,
            frames: 0,
        }
    }

    pub fn on_input_event(&mut self, event: InputEvent) -> StateDelta {
        self.ctx.on_input_event(event)
    }

    /// Run one iteration at the clock's current time.
    pub fn frame(&mut self) -> RenderCommands {
        self.frames += 1;
        let elapsed = self.clock.elapsed();
        tick(&mut self.ctx, &mut self.registry, elapsed)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SceneContext {
        &mut self.ctx
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.ctx.camera.set_aspect(width, height);
    }
}
