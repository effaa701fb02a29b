use super::SceneBlender;
use crate::constants::*;
use crate::math::{lerp, lerp_vec3};
use crate::registry::{Fog, Light, SceneRegistry};
use crate::scene::SceneId;
use glam::Vec3;

#[inline]
fn mix_pair((dark, light): (f32, f32), mix: f32) -> f32 {
    lerp(dark, light, mix)
}

#[inline]
fn mix_vec3((dark, light): (Vec3, Vec3), mix: f32) -> Vec3 {
    lerp_vec3(dark, light, mix)
}

/// Renderer-facing environment values for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentFrame {
    pub clear_color: Vec3,
    pub exposure: f32,
    pub fog: Fog,
    /// Mirrors the body-level `light-mode` class.
    pub light_mode: bool,
}

impl SceneBlender {
    /// Ease the theme mix toward the active scene's preference and apply it
    /// to fog, lights and every themed material in the registry.
    pub fn update_environment(&mut self, active: SceneId, registry: &mut SceneRegistry) -> EnvironmentFrame {
        let wants_light = active.wants_light();
        self.env_mix = lerp(self.env_mix, if wants_light { 1.0 } else { 0.0 }, ENV_MIX_SPEED);
        let mix = self.env_mix;
        let pipeline = active == SceneId::Pipeline;

        let fog = Fog {
            color: mix_vec3((FOG_COLOR_DARK, FOG_COLOR_LIGHT), mix),
            density: mix_pair((FOG_DENSITY_DARK, FOG_DENSITY_LIGHT), mix),
        };
        if registry.fog.is_some() {
            registry.fog = Some(fog);
        }

        let light_exposure = if pipeline { EXPOSURE_LIGHT_PIPELINE } else { EXPOSURE_LIGHT };
        let frame = EnvironmentFrame {
            clear_color: mix_vec3((CLEAR_COLOR_DARK, CLEAR_COLOR_LIGHT), mix),
            exposure: lerp(EXPOSURE_DARK, light_exposure, mix),
            fog,
            light_mode: wants_light,
        };

        if let Some(rig) = registry.lights.as_mut() {
            let dim = if pipeline { PIPELINE_LIGHT_DIM } else { 1.0 };
            let set = |light: &mut Light, intensity: (f32, f32), extra: f32| {
                light.intensity = mix_pair(intensity, mix) * dim * extra;
            };
            set(&mut rig.ambient, AMBIENT_INTENSITY, 1.0);
            set(&mut rig.hemi, HEMI_INTENSITY, 1.0);
            set(&mut rig.dir, DIR_INTENSITY, 1.0);
            set(&mut rig.fill, FILL_INTENSITY, 1.0);
            set(&mut rig.point1, POINT1_INTENSITY, POINT_LIGHT_DIM);
            set(&mut rig.point2, POINT2_INTENSITY, POINT_LIGHT_DIM);

            rig.dir.position = mix_vec3(DIR_POSITION, mix);
            rig.fill.position = mix_vec3(FILL_POSITION, mix);
            rig.point1.position = mix_vec3(POINT1_POSITION, mix);
            rig.point2.position = mix_vec3(POINT2_POSITION, mix);
        }

        self.apply_themes(registry);
        frame
    }

    /// Interpolate every themed material between its dark and light bundle.
    /// A side missing a property falls back to the material's current value;
    /// textures swap hard once the mix passes the threshold.
    pub fn apply_themes(&self, registry: &mut SceneRegistry) {
        let mix = self.env_mix;
        for i in 0..registry.themed_materials().len() {
            let id = registry.themed_materials()[i];
            let Some(theme) = registry.theme(id).copied() else {
                continue;
            };
            let Some(m) = registry.material_mut(id) else {
                continue;
            };
            let (dark, light) = (theme.dark, theme.light);

            if let (Some(_), Some(d), Some(l)) = (m.color, dark.color, light.color) {
                m.color = Some(d.lerp(l, mix));
            }
            if let (Some(_), Some(d), Some(l)) = (m.emissive, dark.emissive, light.emissive) {
                m.emissive = Some(d.lerp(l, mix));
            }
            let blend = |current: Option<f32>, d: Option<f32>, l: Option<f32>| {
                current.map(|c| lerp(d.unwrap_or(c), l.unwrap_or(c), mix))
            };
            m.emissive_intensity = blend(m.emissive_intensity, dark.emissive_intensity, light.emissive_intensity);
            m.roughness = blend(m.roughness, dark.roughness, light.roughness);
            m.metalness = blend(m.metalness, dark.metalness, light.metalness);
            m.bump_scale = blend(m.bump_scale, dark.bump_scale, light.bump_scale);

            let map_dark = dark.map.or(m.map);
            let map_light = light.map.or(m.map);
            if map_dark != map_light && (dark.map.is_some() || light.map.is_some()) {
                let next = if mix > TEXTURE_SWAP_MIX { map_light } else { map_dark };
                if m.map != next {
                    m.map = next;
                    m.needs_update = true;
                }
            }
        }
    }
}
