// Host-page wiring: element ids, selectors, CSS hooks.

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub const CANVAS_ID: &str = "webgl";
pub const SECTION_SELECTOR: &str = "section[data-scene]";
pub const SCENE_ATTR: &str = "data-scene";
pub const SMALL_VIEWPORT_QUERY: &str = "(max-width: 768px)";

// Section classes
pub const CLASS_LOCKABLE: &str = "scene-lockable";
pub const CLASS_PINNED: &str = "scene-pinned";
pub const CLASS_REVEALED: &str = "scene-revealed";
pub const CLASS_UNREVEALED: &str = "scene-unrevealed";

// Body class
pub const CLASS_LIGHT_MODE: &str = "light-mode";

// Seed for the showcase layout and spark respawns
pub const SCENE_SEED: u64 = 0x5c7011;
