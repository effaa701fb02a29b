//! Scene registry: the named 3D objects, lights and themed materials that the
//! engine manipulates by reference.
//!
//! Objects live in flat arenas addressed by typed ids. Per-scene "rigs" name
//! the objects each animator drives, and theme bundles live in a side table
//! keyed by material id instead of being attached to the material itself.

use crate::scene::PerPrimary;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};
use smallvec::SmallVec;

mod showcase;

pub use showcase::showcase;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub usize);

/// Material properties the engine reads and writes. Optional fields model
/// material kinds that lack the property entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Option<Vec3>,
    pub emissive: Option<Vec3>,
    pub emissive_intensity: Option<f32>,
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
    pub bump_scale: Option<f32>,
    pub map: Option<TextureId>,
    pub opacity: f32,
    pub transparent: bool,
    pub depth_write: bool,
    pub needs_update: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Some(Vec3::ONE),
            emissive: None,
            emissive_intensity: None,
            roughness: None,
            metalness: None,
            bump_scale: None,
            map: None,
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            needs_update: false,
        }
    }
}

impl Material {
    /// Unlit material with a flat colour.
    pub fn basic(color: Vec3) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Lit material with the full physical parameter set.
    pub fn standard(color: Vec3, roughness: f32, metalness: f32) -> Self {
        Self {
            color: Some(color),
            emissive: Some(Vec3::ZERO),
            emissive_intensity: Some(1.0),
            roughness: Some(roughness),
            metalness: Some(metalness),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn with_emissive(mut self, emissive: Vec3, intensity: f32) -> Self {
        self.emissive = Some(emissive);
        self.emissive_intensity = Some(intensity);
        self
    }

    pub fn with_map(mut self, map: TextureId) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_bump_scale(mut self, bump_scale: f32) -> Self {
        self.bump_scale = Some(bump_scale);
        self
    }

    pub fn without_depth_write(mut self) -> Self {
        self.depth_write = false;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Texture {
    pub offset: Vec2,
}

/// One object in the scene graph. `vertices` holds line/point geometry in
/// local space; `radius` is the draw size hint for solid objects.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub visible: bool,
    pub materials: SmallVec<[MaterialId; 2]>,
    pub vertices: Vec<Vec3>,
    pub radius: f32,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
            materials: SmallVec::new(),
            vertices: Vec::new(),
            radius: 0.0,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<Vec3>) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn local_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rot, self.position)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightRig {
    pub ambient: Light,
    pub hemi: Light,
    pub dir: Light,
    pub fill: Light,
    pub point1: Light,
    pub point2: Light,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub density: f32,
}

/// One side of a themed material's property bundle. Absent fields fall back
/// to the material's current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemeProps {
    pub color: Option<Vec3>,
    pub emissive: Option<Vec3>,
    pub emissive_intensity: Option<f32>,
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
    pub bump_scale: Option<f32>,
    pub map: Option<TextureId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemeBundle {
    pub dark: ThemeProps,
    pub light: ThemeProps,
}

// ---------------- Per-scene rigs ----------------

#[derive(Clone, Debug)]
pub struct DocRegion {
    pub node: NodeId,
    pub home: Vec3,
    pub scatter: Vec3,
}

#[derive(Clone, Debug)]
pub struct DocTag {
    pub group: NodeId,
    pub line: NodeId,
    pub anchor_index: usize,
    pub anchor_offset: Vec3,
    pub mid_offset: Vec3,
    pub label_offset: Vec3,
}

#[derive(Clone, Debug)]
pub struct DocRig {
    pub group: NodeId,
    pub paper: NodeId,
    pub regions: Vec<DocRegion>,
    pub nodes: Vec<NodeId>,
    pub tags: Vec<DocTag>,
    pub links: NodeId,
}

#[derive(Clone, Debug)]
pub struct RagNode {
    pub node: NodeId,
    pub base: Vec3,
    pub seed: f32,
}

#[derive(Clone, Debug)]
pub struct RagRig {
    pub group: NodeId,
    pub nodes: Vec<RagNode>,
    pub edges: Vec<NodeId>,
    pub tubes: Vec<NodeId>,
    pub query: NodeId,
}

#[derive(Clone, Debug, Default)]
pub struct StationParts {
    pub light: Option<NodeId>,
    pub housing: Option<NodeId>,
    pub core: Option<NodeId>,
    pub window: Option<NodeId>,
}

#[derive(Clone, Debug)]
pub struct PipelineRig {
    pub group: NodeId,
    pub doc: NodeId,
    pub belt_textures: SmallVec<[TextureId; 2]>,
    pub rollers: Vec<NodeId>,
    pub stations: Vec<NodeId>,
    pub station_parts: Vec<StationParts>,
    pub scan_beam: Option<NodeId>,
    pub strokes: Vec<NodeId>,
    pub sparks: Option<NodeId>,
    pub spark_velocities: Vec<Vec3>,
}

/// Flattened, world-space view of one visible object for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub position: Vec3,
    pub size: f32,
    pub color: Vec4,
}

#[derive(Default)]
pub struct SceneRegistry {
    nodes: Vec<Node>,
    materials: Vec<Material>,
    textures: Vec<Texture>,
    roots: Vec<NodeId>,
    themes: FnvHashMap<MaterialId, ThemeBundle>,
    themed: Vec<MaterialId>,

    pub groups: PerPrimary<Option<NodeId>>,
    pub core: Option<NodeId>,
    pub particles: Option<NodeId>,
    pub doc: Option<DocRig>,
    pub rag: Option<RagRig>,
    pub pipeline: Option<PipelineRig>,
    pub lights: Option<LightRig>,
    pub fog: Option<Fog>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    /// Add a top-level node.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.push_node(node, None);
        self.roots.push(id);
        id
    }

    /// Add `node` under `parent`. An unknown parent makes it a root.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        if parent.0 >= self.nodes.len() {
            return self.add_node(node);
        }
        let id = self.push_node(node, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push_node(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Attach a dark/light property bundle to a material.
    pub fn register_theme(&mut self, material: MaterialId, bundle: ThemeBundle) {
        if self.themes.insert(material, bundle).is_none() {
            self.themed.push(material);
        }
    }

    /// Themed materials in registration order.
    pub fn themed_materials(&self) -> &[MaterialId] {
        &self.themed
    }

    pub fn theme(&self, material: MaterialId) -> Option<&ThemeBundle> {
        self.themes.get(&material)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.0)
    }

    pub fn texture_mut(&mut self, id: TextureId) -> Option<&mut Texture> {
        self.textures.get_mut(id.0)
    }

    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }

    /// First material of a node, the one animators fade.
    pub fn node_material_mut(&mut self, id: NodeId) -> Option<&mut Material> {
        let mat = *self.nodes.get(id.0)?.materials.first()?;
        self.materials.get_mut(mat.0)
    }

    pub fn node_material(&self, id: NodeId) -> Option<&Material> {
        let mat = *self.nodes.get(id.0)?.materials.first()?;
        self.materials.get(mat.0)
    }

    pub fn set_opacity(&mut self, id: NodeId, opacity: f32) {
        if let Some(m) = self.node_material_mut(id) {
            m.opacity = opacity;
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first walk of `root` and its descendants.
    pub fn traverse(&self, root: NodeId, visit: &mut impl FnMut(NodeId, &Node)) {
        let mut stack: SmallVec<[NodeId; 16]> = SmallVec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id.0) else {
                continue;
            };
            visit(id, node);
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
    }

    /// World-space draw list of every visible object. Invisible nodes hide
    /// their whole subtree.
    pub fn draw_items(&self) -> Vec<DrawItem> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(NodeId, Mat4)> =
            self.roots.iter().rev().map(|r| (*r, Mat4::IDENTITY)).collect();
        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(id.0) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            let world = parent_world * node.local_matrix();
            if let Some(color) = self.node_color(node) {
                let uniform_scale = world.x_axis.truncate().length();
                if node.vertices.is_empty() {
                    if node.radius > 0.0 {
                        out.push(DrawItem {
                            position: world.transform_point3(Vec3::ZERO),
                            size: node.radius * uniform_scale,
                            color,
                        });
                    }
                } else {
                    let size = node.radius.max(0.02) * uniform_scale;
                    out.extend(node.vertices.iter().map(|v| DrawItem {
                        position: world.transform_point3(*v),
                        size,
                        color,
                    }));
                }
            }
            for child in node.children.iter().rev() {
                stack.push((*child, world));
            }
        }
        out
    }

    fn node_color(&self, node: &Node) -> Option<Vec4> {
        let mat = self.materials.get(node.materials.first()?.0)?;
        let base = mat.color.unwrap_or(Vec3::ONE);
        let glow = mat.emissive.unwrap_or(Vec3::ZERO) * mat.emissive_intensity.unwrap_or(0.0);
        let alpha = if mat.transparent { mat.opacity } else { 1.0 };
        (alpha > 0.0).then(|| Vec4::from(((base + glow).min(Vec3::splat(4.0)), alpha)))
    }
}
