// Host-side tests for tuning constants and their relationships.
// The web crate is wasm-only, so its host-page constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use scrollscape_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn progress_thresholds_are_ordered() {
    assert!(RELEASE_FLOOR > 0.0);
    assert!(RELEASE_FLOOR < REVEAL_AT);
    assert!(REVEAL_AT < RELEASE_AT);
    assert!(RELEASE_AT < PROGRESS_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_speeds_are_positive() {
    assert!(WHEEL_SPEED_DESKTOP > 0.0);
    assert!(WHEEL_SPEED_MOBILE > WHEEL_SPEED_DESKTOP);
    assert!(TOUCH_SPEED > WHEEL_SPEED_MOBILE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_thresholds_are_ordered() {
    assert!(VISIBLE_MIN_ALPHA < DEPTH_WRITE_MIN_ALPHA);
    assert!(DEPTH_WRITE_MIN_ALPHA < OPAQUE_MIN_ALPHA);
    assert!(OPAQUE_MIN_ALPHA < 1.0);

    // Lerp factors must converge without overshoot
    for f in [GROUP_FADE_SPEED, ENV_MIX_SPEED, CAMERA_LERP, PIPELINE_STATION_EASE] {
        assert!(f > 0.0 && f < 1.0);
    }
    assert!(TEXTURE_SWAP_MIX > 0.0 && TEXTURE_SWAP_MIX < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn environment_endpoints_are_sane() {
    assert!(EXPOSURE_LIGHT < EXPOSURE_DARK);
    assert!(EXPOSURE_LIGHT_PIPELINE <= EXPOSURE_LIGHT);
    assert!(FOG_DENSITY_LIGHT < FOG_DENSITY_DARK);
    assert!(PIPELINE_LIGHT_DIM > 0.0 && PIPELINE_LIGHT_DIM <= 1.0);
    assert!(POINT_LIGHT_DIM > 0.0 && POINT_LIGHT_DIM <= 1.0);
    for (dark, light) in [AMBIENT_INTENSITY, HEMI_INTENSITY, DIR_INTENSITY, FILL_INTENSITY] {
        assert!(light > dark);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spark_emitter_sits_inside_bounds() {
    assert!(SPARK_EMIT_Y < SPARK_MAX_Y);
    assert!(SPARK_EMIT_SPREAD_X * 0.5 < SPARK_MAX_ABS_X);
    assert!(SPARK_EMIT_SPREAD_Z * 0.5 < SPARK_MAX_ABS_Z);
    assert!(PIPELINE_DOC_START_X < PIPELINE_DOC_END_X);
}

#[test]
fn section_classes_are_distinct() {
    let classes = [CLASS_LOCKABLE, CLASS_PINNED, CLASS_REVEALED, CLASS_UNREVEALED];
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("scene-"));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(SECTION_SELECTOR.contains(SCENE_ATTR));
}

#[test]
fn scene_shader_has_entry_points() {
    assert!(SCENE_WGSL.contains("fn vs_main"));
    assert!(SCENE_WGSL.contains("fn fs_main"));
}
