// Host-side tests for the scroll lock state machine.

use scrollscape_core::constants::{PROGRESS_MAX, RELEASE_AT, RELEASE_FLOOR, TOUCH_SPEED, WHEEL_SPEED_DESKTOP};
use scrollscape_core::lock::{LockTransition, ScrollTick};
use scrollscape_core::{
    Gesture, GestureSource, SceneId, SceneProgress, ScrollLock, ScrollLockController, ScrollMetrics, ScrollTracker,
    SectionGeometry,
};

// Four stacked 1000px sections over a 4000px scroll range; the page sits in
// the middle of doc-parse.
fn tracker_at(scroll_top: f64) -> ScrollTracker {
    let metrics = ScrollMetrics {
        scroll_top,
        scroll_height: 5000.0,
        client_height: 1000.0,
    };
    let sections: Vec<SectionGeometry> = [SceneId::Intro, SceneId::DocParse, SceneId::Rag, SceneId::Pipeline]
        .iter()
        .enumerate()
        .map(|(i, scene)| SectionGeometry {
            scene: *scene,
            top: i as f64 * 1000.0,
            height: 1000.0,
        })
        .collect();
    let mut tracker = ScrollTracker::new();
    tracker.build_section_ranges(&sections, &metrics);
    tracker.on_scroll(&metrics);
    tracker
}

fn wheel(delta: f32) -> Gesture {
    Gesture {
        source: GestureSource::Wheel,
        delta,
    }
}

fn assert_lock_consistent(lock: ScrollLock) {
    assert_eq!(lock.is_active(), lock.scene().is_some());
    assert_eq!(lock.is_active(), lock.pin_y().is_some());
}

#[test]
fn progress_is_clamped_and_lockable_only() {
    let mut p = SceneProgress::default();
    p.set(SceneId::Rag, 5.0);
    assert_eq!(p.get(SceneId::Rag), PROGRESS_MAX);
    assert_eq!(p.add(SceneId::Rag, -10.0), 0.0);

    p.set(SceneId::Intro, 1.0);
    assert_eq!(p.get(SceneId::Intro), 0.0);
    assert_eq!(p.get(SceneId::About), 0.0);
}

#[test]
fn downward_wheel_engages_and_pins_to_section_top() {
    let tracker = tracker_at(1500.0);
    assert_eq!(tracker.active_scene(), SceneId::DocParse);
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);

    let out = ctl.on_gesture(wheel(100.0), SceneId::DocParse, 1500.0, &tracker);
    assert!(out.captured);
    assert_eq!(out.scroll_to, Some(1000.0));
    assert_eq!(out.transitions.as_slice(), &[LockTransition::Engaged(SceneId::DocParse)]);
    assert_eq!(
        ctl.lock(),
        ScrollLock::Locked {
            scene: SceneId::DocParse,
            pin_y: 1000.0
        }
    );
    assert!((ctl.progress().get(SceneId::DocParse) - 100.0 * WHEEL_SPEED_DESKTOP).abs() < 1e-6);

    let classes = ctl.section_classes(SceneId::DocParse);
    assert!(classes.lockable && classes.pinned && classes.unrevealed);
    assert!(!classes.revealed);
    assert_lock_consistent(ctl.lock());
}

#[test]
fn gestures_outside_lockable_sections_pass_through() {
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);

    let intro = tracker_at(0.0);
    let out = ctl.on_gesture(wheel(100.0), SceneId::Intro, 0.0, &intro);
    assert!(!out.captured);
    assert!(out.classes.is_empty());

    // Page offset below the section's pixel bounds
    let tracker = tracker_at(1500.0);
    let out = ctl.on_gesture(wheel(100.0), SceneId::DocParse, 2500.0, &tracker);
    assert!(!out.captured);

    // A zero delta never engages
    let out = ctl.on_gesture(wheel(0.0), SceneId::DocParse, 1500.0, &tracker);
    assert!(!out.captured);
    assert_eq!(ctl.lock(), ScrollLock::Free);
}

#[test]
fn lock_releases_after_enough_downward_travel() {
    let tracker = tracker_at(1500.0);
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);

    let mut released = false;
    for _ in 0..100 {
        let out = ctl.on_gesture(wheel(100.0), SceneId::DocParse, 1500.0, &tracker);
        assert!(out.captured);
        assert_lock_consistent(ctl.lock());
        if out.transitions.contains(&LockTransition::Released(SceneId::DocParse)) {
            released = true;
            break;
        }
    }
    assert!(released);
    assert_eq!(ctl.lock(), ScrollLock::Free);
    let p = ctl.progress().get(SceneId::DocParse);
    assert!(p >= RELEASE_AT && p <= PROGRESS_MAX);
    assert!(ctl.section_classes(SceneId::DocParse).revealed);

    // Past the release point further downward gestures scroll the page
    let out = ctl.on_gesture(wheel(100.0), SceneId::DocParse, 1500.0, &tracker);
    assert!(!out.captured);
}

#[test]
fn huge_deltas_stay_inside_progress_range() {
    let tracker = tracker_at(1500.0);
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);

    let out = ctl.on_gesture(wheel(1.0e9), SceneId::DocParse, 1500.0, &tracker);
    assert!(out.captured);
    assert_eq!(ctl.progress().get(SceneId::DocParse), PROGRESS_MAX);
    assert_eq!(ctl.lock(), ScrollLock::Free);

    let out = ctl.on_gesture(wheel(-1.0e9), SceneId::DocParse, 1500.0, &tracker);
    assert!(out.captured);
    assert_eq!(ctl.progress().get(SceneId::DocParse), 0.0);
    assert_eq!(ctl.lock(), ScrollLock::Free);
}

#[test]
fn upward_release_does_not_immediately_relock() {
    let tracker = tracker_at(1500.0);
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);
    ctl.progress_mut().set(SceneId::DocParse, 0.05);

    let out = ctl.on_gesture(wheel(-100.0), SceneId::DocParse, 1500.0, &tracker);
    assert!(out.captured);
    assert_eq!(
        out.transitions.as_slice(),
        &[
            LockTransition::Engaged(SceneId::DocParse),
            LockTransition::Released(SceneId::DocParse)
        ]
    );
    assert!(ctl.progress().get(SceneId::DocParse) <= RELEASE_FLOOR);

    let out = ctl.on_gesture(wheel(-100.0), SceneId::DocParse, 1500.0, &tracker);
    assert!(!out.captured);
    assert_eq!(ctl.lock(), ScrollLock::Free);

    // Scrolling back down re-engages
    let out = ctl.on_gesture(wheel(100.0), SceneId::DocParse, 1500.0, &tracker);
    assert!(out.captured);
    assert!(ctl.lock().is_active());
}

#[test]
fn locked_gestures_drive_the_locked_scene() {
    let tracker = tracker_at(1500.0);
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);
    ctl.on_gesture(wheel(100.0), SceneId::DocParse, 1500.0, &tracker);
    let before = ctl.progress().get(SceneId::DocParse);

    let out = ctl.on_gesture(wheel(100.0), SceneId::Rag, 2500.0, &tracker);
    assert!(out.captured);
    assert_eq!(out.scroll_to, Some(1000.0));
    assert!(ctl.progress().get(SceneId::DocParse) > before);
    assert_eq!(ctl.progress().get(SceneId::Rag), 0.0);
}

#[test]
fn touch_moves_follow_the_anchor() {
    let tracker = tracker_at(1500.0);
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);

    // No anchor yet: the move only seeds one
    let out = ctl.on_touch_move(400.0, SceneId::DocParse, 1500.0, &tracker);
    assert!(!out.captured);
    assert_eq!(ctl.lock(), ScrollLock::Free);

    ctl.on_touch_start(500.0);
    let out = ctl.on_touch_move(400.0, SceneId::DocParse, 1500.0, &tracker);
    assert!(out.captured);
    assert!((ctl.progress().get(SceneId::DocParse) - 100.0 * TOUCH_SPEED).abs() < 1e-5);

    let out = ctl.on_touch_move(350.0, SceneId::DocParse, 1500.0, &tracker);
    assert!(out.captured);
    assert!((ctl.progress().get(SceneId::DocParse) - 150.0 * TOUCH_SPEED).abs() < 1e-5);
}

#[test]
fn native_scroll_is_repinned_while_locked() {
    let tracker = tracker_at(1500.0);
    let mut ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);
    assert_eq!(ctl.on_scroll(1500.0), ScrollTick::Free);

    ctl.on_gesture(wheel(100.0), SceneId::DocParse, 1500.0, &tracker);
    assert_eq!(ctl.on_scroll(1000.5), ScrollTick::Held);
    assert_eq!(ctl.on_scroll(1003.0), ScrollTick::Repin(1000.0));
    assert_eq!(ctl.on_scroll(990.0), ScrollTick::Repin(1000.0));
}

#[test]
fn section_classes_cover_every_lockable_scene() {
    let ctl = ScrollLockController::new(WHEEL_SPEED_DESKTOP);
    let all = ctl.all_section_classes();
    let scenes: Vec<SceneId> = all.iter().map(|c| c.scene).collect();
    assert_eq!(scenes, SceneId::LOCKABLE.to_vec());
    assert!(all.iter().all(|c| c.lockable && !c.pinned && c.unrevealed));

    let intro = ctl.section_classes(SceneId::Intro);
    assert!(!intro.lockable && !intro.unrevealed && !intro.revealed);
}
