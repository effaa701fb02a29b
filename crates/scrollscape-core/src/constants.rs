use glam::Vec3;

// Shared scroll/scene tuning constants used by the core and the web frontend.

// Scene progress (scroll-locked scenes)
pub const PROGRESS_MAX: f32 = 2.6; // upper clamp; values above 1.0 are overdrive
pub const REVEAL_AT: f32 = 0.5; // progress at which a section counts as revealed
pub const RELEASE_AT: f32 = 2.2; // downward release threshold
pub const RELEASE_FLOOR: f32 = 0.001; // upward release threshold

// Gesture → progress conversion (progress per input unit)
pub const WHEEL_SPEED_DESKTOP: f32 = 0.00085;
pub const WHEEL_SPEED_MOBILE: f32 = 0.0012;
pub const TOUCH_SPEED: f32 = 0.0021;

// Scroll geometry
pub const SECTION_EDGE_TOLERANCE_PX: f64 = 2.0; // slack when testing scroll offset against section bounds
pub const PIN_DRIFT_TOLERANCE_PX: f64 = 1.0; // re-pin when the page drifts further than this
pub const RANGE_EPSILON: f32 = 1e-6; // floor for zero-height section ranges

// Blending
pub const GROUP_FADE_SPEED: f32 = 0.06; // per-frame lerp factor for group alpha
pub const ENV_MIX_SPEED: f32 = 0.06; // per-frame lerp factor for the light/dark mix
pub const DEPTH_WRITE_MIN_ALPHA: f32 = 0.18; // depth writes disabled at or below this
pub const OPAQUE_MIN_ALPHA: f32 = 0.999; // transparency forced below this
pub const VISIBLE_MIN_ALPHA: f32 = 0.02; // group hidden at or below this
pub const TEXTURE_SWAP_MIX: f32 = 0.6; // themed texture switches to light above this

// Camera
pub const CAMERA_LERP: f32 = 0.08;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Overlay sections rendered on a primary scene
pub const SERVICES_PIPELINE_PROGRESS: f32 = 0.55;
pub const SERVICES_CAMERA_PROGRESS: f32 = 0.35;

// Environment endpoints (dark → light)
pub const FOG_COLOR_DARK: Vec3 = Vec3::new(0.0196, 0.0196, 0.0196); // #050505
pub const FOG_COLOR_LIGHT: Vec3 = Vec3::new(0.9137, 0.9333, 0.9490); // #e9eef2
pub const FOG_DENSITY_DARK: f32 = 0.0012;
pub const FOG_DENSITY_LIGHT: f32 = 0.00085;
pub const CLEAR_COLOR_DARK: Vec3 = Vec3::new(0.0196, 0.0196, 0.0196); // #050505
pub const CLEAR_COLOR_LIGHT: Vec3 = Vec3::new(0.9490, 0.9569, 0.9686); // #f2f4f7
pub const EXPOSURE_DARK: f32 = 1.55;
pub const EXPOSURE_LIGHT: f32 = 1.15;
pub const EXPOSURE_LIGHT_PIPELINE: f32 = 1.0;

// Light rig dimming
pub const PIPELINE_LIGHT_DIM: f32 = 0.5;
pub const POINT_LIGHT_DIM: f32 = 0.7;

// Light rig intensities: (dark, light)
pub const AMBIENT_INTENSITY: (f32, f32) = (1.1, 2.1);
pub const HEMI_INTENSITY: (f32, f32) = (0.75, 1.35);
pub const DIR_INTENSITY: (f32, f32) = (3.2, 5.4);
pub const FILL_INTENSITY: (f32, f32) = (1.3, 2.4);
pub const POINT1_INTENSITY: (f32, f32) = (14.0, 26.0);
pub const POINT2_INTENSITY: (f32, f32) = (12.0, 24.0);

// Light rig positions: (dark, light)
pub const DIR_POSITION: (Vec3, Vec3) = (Vec3::new(6.0, 7.0, 6.0), Vec3::new(0.2, 9.2, 3.6));
pub const FILL_POSITION: (Vec3, Vec3) = (Vec3::new(-6.0, 3.0, -4.0), Vec3::new(-2.6, 7.4, -2.2));
pub const POINT1_POSITION: (Vec3, Vec3) = (Vec3::new(-4.5, 0.8, 3.0), Vec3::new(-2.4, 6.6, 1.8));
pub const POINT2_POSITION: (Vec3, Vec3) = (Vec3::new(4.5, -0.8, 3.0), Vec3::new(2.4, 6.8, 1.8));

// Spark particle bounds and emission
pub const SPARK_MAX_Y: f32 = 2.3;
pub const SPARK_MAX_ABS_X: f32 = 2.2;
pub const SPARK_MAX_ABS_Z: f32 = 1.2;
pub const SPARK_EMIT_SPREAD_X: f32 = 1.8;
pub const SPARK_EMIT_SPREAD_Z: f32 = 0.9;
pub const SPARK_EMIT_Y: f32 = 0.15;

// Pipeline belt
pub const PIPELINE_DOC_START_X: f32 = -3.55;
pub const PIPELINE_DOC_END_X: f32 = 3.55;
pub const PIPELINE_STATION_EASE: f32 = 0.08;
