use super::*;
use crate::constants::{
    AMBIENT_INTENSITY, DIR_INTENSITY, DIR_POSITION, FILL_INTENSITY, FILL_POSITION,
    FOG_COLOR_DARK, FOG_DENSITY_DARK, HEMI_INTENSITY, POINT1_INTENSITY, POINT1_POSITION,
    POINT2_INTENSITY, POINT2_POSITION, SPARK_EMIT_Y,
};
use crate::profile::ViewportProfile;
use crate::scene::SceneId;
use rand::prelude::*;

// Palette
const CYAN: Vec3 = Vec3::new(0.0, 0.953, 1.0);
const VIOLET: Vec3 = Vec3::new(0.439, 0.0, 1.0);
const INK: Vec3 = Vec3::new(0.067, 0.067, 0.067);
const PAPER: Vec3 = Vec3::new(0.96, 0.96, 0.94);
const SLATE: Vec3 = Vec3::new(0.2, 0.24, 0.3);

const STATION_XS: [f32; 5] = [-3.0, -1.5, 0.0, 1.5, 3.0];
const RAG_NODE_COUNT: usize = 14;
const ROLLER_COUNT: usize = 8;

/// Build the default four-scene layout used by the landing page.
pub fn showcase(profile: &ViewportProfile, seed: u64) -> SceneRegistry {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut reg = SceneRegistry::new();

    reg.lights = Some(dark_light_rig());
    reg.fog = Some(Fog {
        color: FOG_COLOR_DARK,
        density: FOG_DENSITY_DARK,
    });

    let particle_mat = reg.add_material(Material::basic(CYAN).with_opacity(0.8).without_depth_write());
    let cloud: Vec<Vec3> = (0..profile.particle_count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 20.0,
                (rng.gen::<f32>() - 0.5) * 20.0,
                (rng.gen::<f32>() - 0.5) * 20.0,
            )
        })
        .collect();
    reg.particles = Some(
        reg.add_node(
            Node::new("particles")
                .with_material(particle_mat)
                .with_vertices(cloud)
                .with_radius(0.02),
        ),
    );

    build_intro(&mut reg);
    build_doc(&mut reg, &mut rng);
    build_rag(&mut reg, &mut rng);
    build_pipeline(&mut reg, profile, &mut rng);

    log::debug!(
        "[registry] showcase built: nodes={} themed={}",
        reg.node_count(),
        reg.themed_materials().len()
    );
    reg
}

fn dark_light_rig() -> LightRig {
    let light = |color: Vec3, intensity: (f32, f32), position: Vec3| Light {
        color,
        intensity: intensity.0,
        position,
    };
    LightRig {
        ambient: light(Vec3::splat(0.25), AMBIENT_INTENSITY, Vec3::ZERO),
        hemi: light(Vec3::ONE, HEMI_INTENSITY, Vec3::Y),
        dir: light(CYAN, DIR_INTENSITY, DIR_POSITION.0),
        fill: light(Vec3::ONE, FILL_INTENSITY, FILL_POSITION.0),
        point1: light(VIOLET, POINT1_INTENSITY, POINT1_POSITION.0),
        point2: light(CYAN, POINT2_INTENSITY, POINT2_POSITION.0),
    }
}

fn themed(reg: &mut SceneRegistry, material: Material, dark: ThemeProps, light: ThemeProps) -> MaterialId {
    let id = reg.add_material(material);
    reg.register_theme(id, ThemeBundle { dark, light });
    id
}

fn build_intro(reg: &mut SceneRegistry) {
    let group = reg.add_node(Node::new("group:intro"));
    reg.groups.set(SceneId::Intro, Some(group));

    let core_mat = themed(
        reg,
        Material::standard(INK, 0.35, 0.6),
        ThemeProps {
            color: Some(INK),
            emissive: Some(Vec3::ZERO),
            roughness: Some(0.35),
            metalness: Some(0.6),
            ..ThemeProps::default()
        },
        ThemeProps {
            color: Some(Vec3::splat(0.85)),
            emissive: Some(Vec3::splat(0.05)),
            roughness: Some(0.55),
            metalness: Some(0.2),
            ..ThemeProps::default()
        },
    );
    let core = reg.add_child(group, Node::new("core").with_material(core_mat).with_radius(1.0));
    let wire_mat = reg.add_material(Material::basic(CYAN).with_opacity(0.1));
    reg.add_child(core, Node::new("core:wireframe").with_material(wire_mat).with_radius(1.02));
    reg.core = Some(core);
}

fn build_doc(reg: &mut SceneRegistry, rng: &mut StdRng) {
    let group = reg.add_node(Node::new("group:doc-parse"));
    reg.groups.set(SceneId::DocParse, Some(group));

    let paper_mat = themed(
        reg,
        Material::standard(PAPER, 0.9, 0.0).with_opacity(0.95).with_bump_scale(0.02),
        ThemeProps {
            color: Some(Vec3::splat(0.75)),
            bump_scale: Some(0.04),
            ..ThemeProps::default()
        },
        ThemeProps {
            color: Some(PAPER),
            bump_scale: Some(0.01),
            ..ThemeProps::default()
        },
    );
    let paper = reg.add_child(group, Node::new("doc:paper").with_material(paper_mat).with_radius(1.3));

    let homes = [
        Vec3::new(0.0, 0.55, 0.05),
        Vec3::new(-0.3, 0.0, 0.05),
        Vec3::new(0.25, -0.5, 0.05),
    ];
    let mut regions = Vec::with_capacity(homes.len());
    let mut nodes = Vec::with_capacity(homes.len());
    for (i, home) in homes.iter().enumerate() {
        let scatter = Vec3::new(
            (i as f32 - 1.0) * 1.6,
            home.y * 1.4 + (rng.gen::<f32>() - 0.5) * 0.3,
            0.6 + rng.gen::<f32>() * 0.4,
        );
        let region_mat = reg.add_material(Material::basic(CYAN.lerp(PAPER, 0.6)).with_opacity(0.9));
        let node = reg.add_child(
            group,
            Node::new(format!("doc:region:{i}")).at(*home).with_material(region_mat).with_radius(0.35),
        );
        regions.push(DocRegion {
            node,
            home: *home,
            scatter,
        });
        let dot_mat = reg.add_material(Material::basic(CYAN).with_opacity(0.25));
        nodes.push(reg.add_child(
            group,
            Node::new(format!("doc:node:{i}")).at(*home).with_material(dot_mat).with_radius(0.08),
        ));
    }

    let mut tags = Vec::with_capacity(regions.len());
    for i in 0..regions.len() {
        let tag_group = reg.add_child(group, Node::new(format!("doc:tag:{i}")));
        let line_mat = reg.add_material(Material::basic(SLATE).with_opacity(0.7));
        let line = reg.add_child(
            tag_group,
            Node::new(format!("doc:tag-line:{i}"))
                .with_material(line_mat)
                .with_vertices(vec![Vec3::ZERO; 3])
                .with_radius(0.015),
        );
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        tags.push(DocTag {
            group: tag_group,
            line,
            anchor_index: i,
            anchor_offset: Vec3::new(0.2 * side, 0.0, 0.05),
            mid_offset: Vec3::new(0.45 * side, 0.15, 0.1),
            label_offset: Vec3::new(0.8 * side, 0.15, 0.1),
        });
    }

    let links_mat = reg.add_material(Material::basic(CYAN).with_opacity(0.0));
    let links = reg.add_child(
        group,
        Node::new("doc:links")
            .with_material(links_mat)
            .with_vertices(vec![Vec3::ZERO; 6])
            .with_radius(0.02),
    );

    reg.doc = Some(DocRig {
        group,
        paper,
        regions,
        nodes,
        tags,
        links,
    });
}

fn build_rag(reg: &mut SceneRegistry, rng: &mut StdRng) {
    let group = reg.add_node(Node::new("group:rag"));
    reg.groups.set(SceneId::Rag, Some(group));

    let mut nodes = Vec::with_capacity(RAG_NODE_COUNT);
    let golden = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    for i in 0..RAG_NODE_COUNT {
        let y = 1.0 - 2.0 * (i as f32 + 0.5) / RAG_NODE_COUNT as f32;
        let r = (1.0 - y * y).sqrt();
        let theta = golden * i as f32;
        let base = Vec3::new(theta.cos() * r, y, theta.sin() * r) * 1.6;
        let mat = themed(
            reg,
            Material::standard(CYAN, 0.3, 0.4).with_emissive(CYAN, 0.4).with_opacity(0.45),
            ThemeProps {
                emissive: Some(CYAN),
                emissive_intensity: Some(0.6),
                ..ThemeProps::default()
            },
            ThemeProps {
                emissive: Some(VIOLET),
                emissive_intensity: Some(0.15),
                ..ThemeProps::default()
            },
        );
        let node = reg.add_child(
            group,
            Node::new(format!("rag:node:{i}")).at(base).with_material(mat).with_radius(0.1),
        );
        nodes.push(RagNode {
            node,
            base,
            seed: rng.gen::<f32>() * std::f32::consts::TAU,
        });
    }

    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        let j = (i + 1 + rng.gen_range(0..3)) % nodes.len();
        let mat = reg.add_material(Material::basic(CYAN).with_opacity(0.08));
        edges.push(reg.add_child(
            group,
            Node::new(format!("rag:edge:{i}"))
                .with_material(mat)
                .with_vertices(vec![nodes[i].base, nodes[j].base])
                .with_radius(0.012),
        ));
    }

    let mut tubes = Vec::new();
    for i in 0..3 {
        let mat = reg.add_material(Material::basic(VIOLET).with_opacity(0.18));
        let a = nodes[i * 4].base;
        tubes.push(reg.add_child(
            group,
            Node::new(format!("rag:tube:{i}"))
                .with_material(mat)
                .with_vertices(vec![Vec3::new(-2.6, 0.2, 0.0), a * 0.5, a])
                .with_radius(0.03),
        ));
    }

    let query_mat = reg.add_material(Material::standard(VIOLET, 0.2, 0.5).with_emissive(VIOLET, 0.8));
    let query = reg.add_child(
        group,
        Node::new("rag:query")
            .at(Vec3::new(-2.6, 0.2, 0.0))
            .with_material(query_mat)
            .with_radius(0.22),
    );

    reg.rag = Some(RagRig {
        group,
        nodes,
        edges,
        tubes,
        query,
    });
}

fn build_pipeline(reg: &mut SceneRegistry, profile: &ViewportProfile, rng: &mut StdRng) {
    let group = reg.add_node(Node::new("group:pipeline"));
    reg.groups.set(SceneId::Pipeline, Some(group));

    let belt_dark = reg.add_texture(Texture::default());
    let belt_light = reg.add_texture(Texture::default());
    let belt_mat = themed(
        reg,
        Material::standard(SLATE, 0.8, 0.1).with_map(belt_dark),
        ThemeProps {
            color: Some(SLATE),
            map: Some(belt_dark),
            ..ThemeProps::default()
        },
        ThemeProps {
            color: Some(Vec3::splat(0.7)),
            map: Some(belt_light),
            ..ThemeProps::default()
        },
    );
    let belt_line: Vec<Vec3> = (0..24)
        .map(|i| Vec3::new(-4.0 + i as f32 * (8.0 / 23.0), -0.62, 0.0))
        .collect();
    reg.add_child(
        group,
        Node::new("pipeline:belt")
            .with_material(belt_mat)
            .with_vertices(belt_line)
            .with_radius(0.06),
    );

    let roller_mat = reg.add_material(Material::standard(SLATE, 0.5, 0.8));
    let rollers = (0..ROLLER_COUNT)
        .map(|i| {
            let x = -3.8 + i as f32 * (7.6 / (ROLLER_COUNT - 1) as f32);
            reg.add_child(
                group,
                Node::new(format!("pipeline:roller:{i}"))
                    .at(Vec3::new(x, -0.72, 0.0))
                    .with_material(roller_mat)
                    .with_radius(0.08),
            )
        })
        .collect();

    let doc_mat = reg.add_material(Material::standard(PAPER, 0.9, 0.0).with_emissive(CYAN, 0.25));
    let doc = reg.add_child(
        group,
        Node::new("pipeline:doc")
            .at(Vec3::new(-3.55, -0.48, 0.0))
            .with_material(doc_mat)
            .with_radius(0.3),
    );

    let mut stations = Vec::with_capacity(STATION_XS.len());
    let mut station_parts = Vec::with_capacity(STATION_XS.len());
    for (i, x) in STATION_XS.iter().enumerate() {
        let station = reg.add_child(group, Node::new(format!("pipeline:station:{i}")).at(Vec3::new(*x, 0.0, 0.0)));
        let housing_mat = reg.add_material(Material::standard(SLATE, 0.6, 0.5).with_emissive(CYAN, 0.2));
        let housing = reg.add_child(
            station,
            Node::new(format!("pipeline:housing:{i}")).with_material(housing_mat).with_radius(0.45),
        );
        let light_mat = reg.add_material(Material::basic(CYAN).with_opacity(0.25));
        let light = reg.add_child(
            station,
            Node::new(format!("pipeline:light-bar:{i}"))
                .at(Vec3::new(0.0, 0.55, 0.0))
                .with_material(light_mat)
                .with_radius(0.12),
        );
        let core_mat = reg.add_material(Material::standard(VIOLET, 0.2, 0.3).with_emissive(VIOLET, 0.55));
        let core = reg.add_child(
            station,
            Node::new(format!("pipeline:core:{i}"))
                .at(Vec3::new(0.0, 0.15, 0.3))
                .with_material(core_mat)
                .with_radius(0.14),
        );
        let window_mat = reg.add_material(Material::standard(CYAN, 0.1, 0.0).with_emissive(CYAN, 0.25));
        let window = reg.add_child(
            station,
            Node::new(format!("pipeline:window:{i}"))
                .at(Vec3::new(0.0, 0.0, 0.46))
                .with_material(window_mat)
                .with_radius(0.1),
        );
        stations.push(station);
        station_parts.push(StationParts {
            light: Some(light),
            housing: Some(housing),
            core: Some(core),
            window: Some(window),
        });
    }

    let beam_mat = reg.add_material(Material::basic(CYAN).with_opacity(0.0));
    let scan_beam = reg.add_child(
        group,
        Node::new("pipeline:scan-beam")
            .at(Vec3::new(-2.7, -0.1, 0.0))
            .with_material(beam_mat)
            .with_vertices(vec![Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -0.35, 0.0)])
            .with_radius(0.04),
    );

    let strokes = (0..3)
        .map(|i| {
            let mat = reg.add_material(Material::basic(INK).with_opacity(0.0));
            let y = -0.4 + i as f32 * 0.06;
            let stroke: Vec<Vec3> = (0..8)
                .map(|k| Vec3::new(-0.18 + k as f32 * 0.05, y + (k as f32 * 1.7).sin() * 0.02, 0.02))
                .collect();
            reg.add_child(
                group,
                Node::new(format!("pipeline:stroke:{i}"))
                    .at(Vec3::new(STATION_XS[3], 0.0, 0.0))
                    .with_material(mat)
                    .with_vertices(stroke)
                    .with_radius(0.01),
            )
        })
        .collect();

    let spark_mat = reg.add_material(Material::basic(Vec3::new(1.0, 0.8, 0.4)).with_opacity(0.0).without_depth_write());
    let mut spark_positions = Vec::with_capacity(profile.spark_count);
    let mut spark_velocities = Vec::with_capacity(profile.spark_count);
    for _ in 0..profile.spark_count {
        spark_positions.push(Vec3::new(
            (rng.gen::<f32>() - 0.5) * 1.8,
            SPARK_EMIT_Y + rng.gen::<f32>() * 2.0,
            (rng.gen::<f32>() - 0.5) * 0.9,
        ));
        spark_velocities.push(Vec3::new(
            (rng.gen::<f32>() - 0.5) * 0.01,
            0.006 + rng.gen::<f32>() * 0.012,
            (rng.gen::<f32>() - 0.5) * 0.006,
        ));
    }
    let sparks = reg.add_child(
        group,
        Node::new("pipeline:sparks")
            .with_material(spark_mat)
            .with_vertices(spark_positions)
            .with_radius(0.015),
    );

    reg.pipeline = Some(PipelineRig {
        group,
        doc,
        belt_textures: smallvec::smallvec![belt_dark, belt_light],
        rollers,
        stations,
        station_parts,
        scan_beam: Some(scan_beam),
        strokes,
        sparks: Some(sparks),
        spark_velocities,
    });
}
