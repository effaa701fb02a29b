use crate::constants::{WHEEL_SPEED_DESKTOP, WHEEL_SPEED_MOBILE};
use crate::scene::SceneId;

/// Runtime knobs derived from the host's "small viewport" capability flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportProfile {
    pub small: bool,
    pub wheel_speed: f32,
    pub particle_count: usize,
    pub spark_count: usize,
}

impl ViewportProfile {
    pub fn desktop() -> Self {
        Self {
            small: false,
            wheel_speed: WHEEL_SPEED_DESKTOP,
            particle_count: 2000,
            spark_count: 160,
        }
    }

    pub fn mobile() -> Self {
        Self {
            small: true,
            wheel_speed: WHEEL_SPEED_MOBILE,
            particle_count: 900,
            spark_count: 80,
        }
    }

    pub fn for_viewport(small: bool) -> Self {
        if small {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    /// Uniform scale applied to a primary scene's group.
    pub fn group_scale(&self, scene: SceneId) -> f32 {
        if !self.small {
            return 1.0;
        }
        match scene {
            SceneId::DocParse | SceneId::Pipeline => 0.9,
            SceneId::Rag => 0.95,
            _ => 1.0,
        }
    }
}

impl Default for ViewportProfile {
    fn default() -> Self {
        Self::desktop()
    }
}
