//! Scene identifiers and the fixed relationships between them.
//!
//! Every page section carries one of eight scene ids. Only four of them own
//! dedicated 3D content (the primary scenes); the rest alias onto a primary
//! scene for rendering. Three primary scenes are lockable: they can hold the
//! page scroll and play an internal, progress-driven animation.

use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene id: {0:?}")]
    UnknownScene(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    Intro,
    DocParse,
    Rag,
    Pipeline,
    About,
    Services,
    Team,
    Contact,
}

impl SceneId {
    pub const ALL: [SceneId; 8] = [
        SceneId::Intro,
        SceneId::DocParse,
        SceneId::Rag,
        SceneId::Pipeline,
        SceneId::About,
        SceneId::Services,
        SceneId::Team,
        SceneId::Contact,
    ];

    /// Scenes with their own 3D group, in group order.
    pub const PRIMARY: [SceneId; 4] = [
        SceneId::Intro,
        SceneId::DocParse,
        SceneId::Rag,
        SceneId::Pipeline,
    ];

    /// Scenes that may hold the scroll lock.
    pub const LOCKABLE: [SceneId; 3] = [SceneId::DocParse, SceneId::Rag, SceneId::Pipeline];

    pub fn as_str(self) -> &'static str {
        match self {
            SceneId::Intro => "intro",
            SceneId::DocParse => "doc-parse",
            SceneId::Rag => "rag",
            SceneId::Pipeline => "pipeline",
            SceneId::About => "about",
            SceneId::Services => "services",
            SceneId::Team => "team",
            SceneId::Contact => "contact",
        }
    }

    #[inline]
    pub fn is_lockable(self) -> bool {
        matches!(self, SceneId::DocParse | SceneId::Rag | SceneId::Pipeline)
    }

    /// Primary scene whose visuals this scene is rendered with.
    #[inline]
    pub fn target(self) -> SceneId {
        match self {
            SceneId::About | SceneId::Team | SceneId::Contact => SceneId::Intro,
            SceneId::Services => SceneId::Pipeline,
            primary => primary,
        }
    }

    /// True for overlay sections that borrow another scene's visuals.
    #[inline]
    pub fn is_overlay(self) -> bool {
        self.target() != self
    }

    /// Scenes shown with the light theme.
    #[inline]
    pub fn wants_light(self) -> bool {
        matches!(
            self,
            SceneId::About | SceneId::DocParse | SceneId::Rag | SceneId::Services
        )
    }

    /// Slot of a primary scene in [`SceneId::PRIMARY`].
    #[inline]
    pub fn primary_index(self) -> Option<usize> {
        SceneId::PRIMARY.iter().position(|s| *s == self)
    }

    /// Slot of a lockable scene in [`SceneId::LOCKABLE`].
    #[inline]
    pub fn lockable_index(self) -> Option<usize> {
        SceneId::LOCKABLE.iter().position(|s| *s == self)
    }
}

impl Default for SceneId {
    fn default() -> Self {
        SceneId::Intro
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneId {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| SceneError::UnknownScene(s.to_string()))
    }
}

/// Fixed-size table with one slot per primary scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerPrimary<T>(pub [T; 4]);

impl<T: Copy> PerPrimary<T> {
    pub fn get(&self, scene: SceneId) -> Option<T> {
        scene.primary_index().map(|i| self.0[i])
    }

    pub fn set(&mut self, scene: SceneId, value: T) {
        if let Some(i) = scene.primary_index() {
            self.0[i] = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SceneId, T)> + '_ {
        SceneId::PRIMARY.iter().copied().zip(self.0.iter().copied())
    }
}
