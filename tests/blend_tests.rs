// Host-side tests for group fades and the light/dark environment blend.

use glam::Vec3;
use scrollscape_core::constants::{AMBIENT_INTENSITY, EXPOSURE_DARK, PIPELINE_LIGHT_DIM, POINT1_INTENSITY, POINT_LIGHT_DIM};
use scrollscape_core::registry::{Material, Node};
use scrollscape_core::{showcase, SceneBlender, SceneId, SceneRegistry, ViewportProfile};
use std::collections::HashSet;

fn registry() -> SceneRegistry {
    showcase(&ViewportProfile::desktop(), 7)
}

fn group(reg: &SceneRegistry, scene: SceneId) -> scrollscape_core::registry::NodeId {
    reg.groups.get(scene).flatten().expect("group")
}

#[test]
fn blender_starts_on_intro_in_dark_mode() {
    let blender = SceneBlender::new();
    assert_eq!(blender.group_alpha(SceneId::Intro), 1.0);
    for scene in [SceneId::DocParse, SceneId::Rag, SceneId::Pipeline] {
        assert_eq!(blender.group_alpha(scene), 0.0);
    }
    assert_eq!(blender.env_mix(), 0.0);
}

#[test]
fn group_alphas_converge_monotonically() {
    let mut reg = registry();
    let mut blender = SceneBlender::new();
    let mut prev_rag = blender.group_alpha(SceneId::Rag);
    let mut prev_intro = blender.group_alpha(SceneId::Intro);

    for _ in 0..120 {
        blender.update_group_fades(SceneId::Rag, &mut reg);
        let rag = blender.group_alpha(SceneId::Rag);
        let intro = blender.group_alpha(SceneId::Intro);
        assert!(rag >= prev_rag && rag <= 1.0);
        assert!(intro <= prev_intro && intro >= 0.0);
        prev_rag = rag;
        prev_intro = intro;
    }
    assert!(prev_rag > 0.99);
    assert!(prev_intro < 0.01);

    assert!(reg.node(group(&reg, SceneId::Rag)).expect("rag").visible);
    assert!(!reg.node(group(&reg, SceneId::Intro)).expect("intro").visible);
}

#[test]
fn overlay_scene_fades_in_its_target_group() {
    let mut reg = registry();
    let mut blender = SceneBlender::new();
    for _ in 0..60 {
        blender.update_group_fades(SceneId::Services, &mut reg);
    }
    assert!(blender.group_alpha(SceneId::Pipeline) > 0.9);
    assert!(blender.group_alpha(SceneId::Intro) < 0.1);
}

#[test]
fn material_records_are_cached_and_unique() {
    let reg = registry();
    let mut blender = SceneBlender::new();
    let pipeline = group(&reg, SceneId::Pipeline);

    let first = blender.material_records(&reg, pipeline).to_vec();
    let second = blender.material_records(&reg, pipeline).to_vec();
    assert_eq!(first, second);

    // Rollers share one material; it is recorded once
    let ids: HashSet<_> = first.iter().map(|r| r.material).collect();
    assert_eq!(ids.len(), first.len());
}

#[test]
fn records_keep_base_values_across_fades() {
    let mut reg = registry();
    let mut blender = SceneBlender::new();
    let intro = group(&reg, SceneId::Intro);

    blender.apply_group_opacity(&mut reg, intro, 0.5);
    blender.apply_group_opacity(&mut reg, intro, 1.0);
    let core = reg.core.expect("core");
    let m = reg.node_material(core).expect("core material");
    assert_eq!(m.opacity, 1.0);
    assert!(!m.transparent);
    assert!(m.depth_write);
}

#[test]
fn opacity_flags_only_dirty_on_change() {
    let mut reg = SceneRegistry::new();
    let mat = reg.add_material(Material::standard(Vec3::ONE, 0.5, 0.5));
    let root = reg.add_node(Node::new("g").with_material(mat).with_radius(1.0));
    let mut blender = SceneBlender::new();

    blender.apply_group_opacity(&mut reg, root, 1.0);
    assert!(!reg.material(mat).expect("mat").needs_update);

    blender.apply_group_opacity(&mut reg, root, 0.5);
    let m = reg.material(mat).expect("mat");
    assert!(m.transparent && m.depth_write && m.needs_update);
    assert!((m.opacity - 0.5).abs() < 1e-6);

    reg.material_mut(mat).expect("mat").needs_update = false;
    blender.apply_group_opacity(&mut reg, root, 0.4);
    assert!(!reg.material(mat).expect("mat").needs_update);

    blender.apply_group_opacity(&mut reg, root, 0.1);
    let m = reg.material(mat).expect("mat");
    assert!(!m.depth_write && m.needs_update);
    assert!(reg.node(root).expect("root").visible);

    blender.apply_group_opacity(&mut reg, root, 0.01);
    assert!(!reg.node(root).expect("root").visible);
}

#[test]
fn pipeline_dims_the_light_rig() {
    let mut reg = registry();
    let mut blender = SceneBlender::new();
    let env = blender.update_environment(SceneId::Pipeline, &mut reg);

    assert!(!env.light_mode);
    assert!((env.exposure - EXPOSURE_DARK).abs() < 1e-6);
    let lights = reg.lights.expect("lights");
    assert!((lights.ambient.intensity - AMBIENT_INTENSITY.0 * PIPELINE_LIGHT_DIM).abs() < 1e-5);
    assert!((lights.point1.intensity - POINT1_INTENSITY.0 * PIPELINE_LIGHT_DIM * POINT_LIGHT_DIM).abs() < 1e-4);
    assert_eq!(reg.fog, Some(env.fog));
}

#[test]
fn light_scenes_drive_mix_toward_one() {
    let mut reg = registry();
    let mut blender = SceneBlender::new();
    let mut prev = blender.env_mix();
    for _ in 0..300 {
        let env = blender.update_environment(SceneId::DocParse, &mut reg);
        assert!(env.light_mode);
        assert!(blender.env_mix() >= prev);
        prev = blender.env_mix();
    }
    assert!(prev > 0.99);

    for _ in 0..300 {
        blender.update_environment(SceneId::Intro, &mut reg);
    }
    assert!(blender.env_mix() < 0.01);
}

#[test]
fn themed_textures_swap_past_threshold() {
    let mut reg = registry();
    let rig = reg.pipeline.as_ref().expect("pipeline rig");
    let (dark, light) = (rig.belt_textures[0], rig.belt_textures[1]);
    let belt = reg
        .themed_materials()
        .iter()
        .copied()
        .find(|id| reg.material(*id).and_then(|m| m.map) == Some(dark))
        .expect("belt material");

    let mut blender = SceneBlender::new();
    blender.update_environment(SceneId::Rag, &mut reg);
    assert_eq!(reg.material(belt).and_then(|m| m.map), Some(dark));

    for _ in 0..60 {
        blender.update_environment(SceneId::Rag, &mut reg);
    }
    assert!(blender.env_mix() > 0.6);
    let m = reg.material(belt).expect("belt");
    assert_eq!(m.map, Some(light));
    assert!(m.needs_update);
}

#[test]
fn missing_theme_props_keep_current_values() {
    let mut reg = registry();
    let rig = reg.rag.as_ref().expect("rag rig");
    let node = rig.nodes[0].node;
    let color_before = reg.node_material(node).expect("node material").color;

    let mut blender = SceneBlender::new();
    for _ in 0..300 {
        blender.update_environment(SceneId::Rag, &mut reg);
    }
    let m = reg.node_material(node).expect("node material");
    assert_eq!(m.color, color_before);
    assert!((m.emissive_intensity.expect("emissive intensity") - 0.15).abs() < 1e-2);
}

#[test]
fn combined_update_matches_separate_passes() {
    let mut combined_reg = registry();
    let mut split_reg = registry();
    let mut combined = SceneBlender::new();
    let mut split = SceneBlender::new();

    for _ in 0..30 {
        let a = combined.update(SceneId::DocParse, &mut combined_reg);
        let b = split.update_environment(SceneId::DocParse, &mut split_reg);
        split.update_group_fades(SceneId::DocParse, &mut split_reg);
        assert_eq!(a, b);
    }
    assert_eq!(combined.env_mix(), split.env_mix());
    assert_eq!(combined.group_alphas(), split.group_alphas());
    let doc = group(&combined_reg, SceneId::DocParse);
    assert_eq!(
        combined_reg.node(doc).map(|n| n.visible),
        split_reg.node(doc).map(|n| n.visible)
    );
}
