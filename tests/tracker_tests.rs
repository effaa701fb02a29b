// Host-side tests for scroll tracking and active scene selection.

use scrollscape_core::{ScrollMetrics, ScrollTracker, SceneError, SceneId, SectionGeometry};

fn metrics(scroll_top: f64, scroll_max: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top,
        scroll_height: scroll_max + 800.0,
        client_height: 800.0,
    }
}

fn geometry(scene: SceneId, top: f64, height: f64) -> SectionGeometry {
    SectionGeometry { scene, top, height }
}

#[test]
fn section_ranges_follow_document_geometry() {
    let mut tracker = ScrollTracker::new();
    tracker.build_section_ranges(
        &[
            geometry(SceneId::Intro, 0.0, 300.0),
            geometry(SceneId::Rag, 300.0, 300.0),
        ],
        &metrics(0.0, 1000.0),
    );

    let rag = tracker.range_for_scene(SceneId::Rag).expect("rag section");
    assert!((rag.start - 0.3).abs() < 1e-6);
    assert!((rag.end - 0.6).abs() < 1e-6);
    assert_eq!(rag.top_y, 300.0);
    assert_eq!(rag.bottom_y, 600.0);
    assert!(tracker.range_for_scene(SceneId::Pipeline).is_none());
}

#[test]
fn nearest_midpoint_selects_scene_and_progress() {
    let mut tracker = ScrollTracker::new();
    tracker.build_section_ranges(
        &[
            geometry(SceneId::Intro, 0.0, 300.0),
            geometry(SceneId::Rag, 300.0, 300.0),
        ],
        &metrics(0.0, 1000.0),
    );
    tracker.set_scroll_percent(0.29);

    let state = tracker.update_active_scene().expect("active scene");
    assert_eq!(state.scene, SceneId::Intro);
    assert!((state.progress - 0.29 / 0.3).abs() < 1e-4);
    assert_eq!(tracker.active_scene(), SceneId::Intro);
}

#[test]
fn equal_distance_keeps_first_section() {
    let mut tracker = ScrollTracker::new();
    tracker.build_section_ranges(
        &[
            geometry(SceneId::DocParse, 0.0, 500.0),
            geometry(SceneId::Rag, 500.0, 500.0),
        ],
        &metrics(0.0, 1000.0),
    );
    tracker.set_scroll_percent(0.5);

    let state = tracker.update_active_scene().expect("active scene");
    assert_eq!(state.scene, SceneId::DocParse);
    assert!((state.progress - 1.0).abs() < 1e-6);
}

#[test]
fn no_sections_leaves_state_untouched() {
    let mut tracker = ScrollTracker::new();
    let before = tracker.active();
    assert!(tracker.on_scroll(&metrics(400.0, 1000.0)).is_none());
    assert_eq!(tracker.active(), before);
    assert!((tracker.scroll_percent() - 0.4).abs() < 1e-6);
}

#[test]
fn zero_height_range_yields_finite_progress() {
    let mut tracker = ScrollTracker::new();
    tracker.build_section_ranges(&[geometry(SceneId::Contact, 1000.0, 0.0)], &metrics(1000.0, 1000.0));
    let section = tracker.sections()[0];
    assert_eq!(section.start, section.end);

    let state = tracker.on_scroll(&metrics(1000.0, 1000.0)).expect("active scene");
    assert_eq!(state.scene, SceneId::Contact);
    assert!(state.progress.is_finite());
    assert!((0.0..=1.0).contains(&state.progress));
}

#[test]
fn scroll_percent_is_clamped_and_guarded() {
    assert_eq!(ScrollTracker::compute_scroll_percent(&metrics(0.0, 1000.0)), 0.0);
    assert!((ScrollTracker::compute_scroll_percent(&metrics(250.0, 1000.0)) - 0.25).abs() < 1e-6);
    assert_eq!(ScrollTracker::compute_scroll_percent(&metrics(5000.0, 1000.0)), 1.0);

    // Content shorter than the viewport: scroll max floors at one pixel
    let short = ScrollMetrics {
        scroll_top: 0.0,
        scroll_height: 500.0,
        client_height: 800.0,
    };
    assert_eq!(short.scroll_max(), 1.0);
    assert_eq!(ScrollTracker::compute_scroll_percent(&short), 0.0);
}

#[test]
fn section_offset_test_uses_tolerance() {
    let mut tracker = ScrollTracker::new();
    tracker.build_section_ranges(&[geometry(SceneId::Rag, 1000.0, 1000.0)], &metrics(0.0, 4000.0));
    let rag = tracker.sections()[0];
    assert!(rag.contains_offset(998.0, 2.0));
    assert!(!rag.contains_offset(997.0, 2.0));
    assert!(rag.contains_offset(1998.0, 2.0));
    assert!(!rag.contains_offset(1999.0, 2.0));
}

#[test]
fn scene_ids_parse_from_markup() {
    assert_eq!("doc-parse".parse::<SceneId>(), Ok(SceneId::DocParse));
    assert_eq!(" services ".parse::<SceneId>(), Ok(SceneId::Services));
    assert_eq!(
        "hero".parse::<SceneId>(),
        Err(SceneError::UnknownScene("hero".to_string()))
    );
    for id in SceneId::ALL {
        assert_eq!(id.as_str().parse::<SceneId>(), Ok(id));
    }
}

#[test]
fn overlay_scenes_alias_onto_primary_scenes() {
    assert_eq!(SceneId::About.target(), SceneId::Intro);
    assert_eq!(SceneId::Team.target(), SceneId::Intro);
    assert_eq!(SceneId::Contact.target(), SceneId::Intro);
    assert_eq!(SceneId::Services.target(), SceneId::Pipeline);
    for id in SceneId::PRIMARY {
        assert_eq!(id.target(), id);
        assert!(!id.is_overlay());
    }
    assert!(!SceneId::Intro.is_lockable());
    assert!(!SceneId::Pipeline.wants_light());
    assert!(SceneId::Services.wants_light());
}
