pub mod animators;
pub mod blend;
pub mod constants;
pub mod lock;
pub mod math;
pub mod profile;
pub mod registry;
pub mod scene;
pub mod scheduler;
pub mod state;
pub mod tracker;

pub use blend::{EnvironmentFrame, MaterialRecord, SceneBlender};
pub use lock::{Gesture, GestureSource, ScrollLock, ScrollLockController, SceneProgress, SectionClasses};
pub use profile::ViewportProfile;
pub use registry::{showcase, SceneRegistry};
pub use scene::{SceneError, SceneId};
pub use scheduler::*;
pub use state::*;
pub use tracker::{ActiveSceneState, ScrollMetrics, ScrollTracker, Section, SectionGeometry};
