//! Hand-off from a computed [`Layout`] to whatever draws it.
//!
//! The layout code never calls into a renderer. A rendering runtime implements
//! [`RenderBinding`] and is passed explicitly to [`render`]; [`SceneBuilder`] is the built-in
//! binding that records a serializable scene description.

use crate::layout::{Layout, Point3};
use linkmap_core::config::RenderConfig;
use serde::Serialize;
use std::collections::BTreeMap;

/// Capabilities a renderer must offer to draw a layout.
pub trait RenderBinding {
    /// Handle to a drawn page marker.
    type Marker;
    /// Handle to a drawn link.
    type Line;

    /// Draw a marker at `at`, tagged with the page id.
    fn marker(&mut self, at: Point3, id: &str) -> Self::Marker;

    /// Draw a straight segment between two points.
    fn segment(&mut self, from: Point3, to: Point3) -> Self::Line;
}

/// Handles produced while rendering a layout.
#[derive(Debug, Clone)]
pub struct Rendered<M, L> {
    pub markers: BTreeMap<String, M>,
    pub lines: Vec<L>,
}

/// Draw every positioned page, then every segment, through `binding`.
pub fn render<B: RenderBinding>(layout: &Layout, binding: &mut B) -> Rendered<B::Marker, B::Line> {
    let markers = layout
        .positions
        .iter()
        .map(|(id, &at)| (id.clone(), binding.marker(at, id)))
        .collect();
    let lines = layout
        .segments
        .iter()
        .map(|s| binding.segment(s.from, s.to))
        .collect();
    Rendered { markers, lines }
}

/// One drawable object of a [`Scene`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneObject {
    Marker {
        id: String,
        position: Point3,
        radius: f64,
        color: String,
    },
    Line {
        from: Point3,
        to: Point3,
        color: String,
    },
}

/// Renderer-agnostic scene description, ready to be serialized for a 3D front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn markers(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects
            .iter()
            .filter(|o| matches!(o, SceneObject::Marker { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects
            .iter()
            .filter(|o| matches!(o, SceneObject::Line { .. }))
    }
}

/// [`RenderBinding`] that appends styled objects to a [`Scene`].
///
/// Handles are indices into [`Scene::objects`].
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    style: RenderConfig,
    scene: Scene,
}

impl SceneBuilder {
    pub fn new(style: RenderConfig) -> Self {
        Self {
            style,
            scene: Scene::default(),
        }
    }

    pub fn finish(self) -> Scene {
        self.scene
    }

    fn push(&mut self, object: SceneObject) -> usize {
        self.scene.objects.push(object);
        self.scene.objects.len() - 1
    }
}

impl RenderBinding for SceneBuilder {
    type Marker = usize;
    type Line = usize;

    fn marker(&mut self, at: Point3, id: &str) -> usize {
        self.push(SceneObject::Marker {
            id: id.to_string(),
            position: at,
            radius: self.style.marker_radius,
            color: self.style.marker_color.clone(),
        })
    }

    fn segment(&mut self, from: Point3, to: Point3) -> usize {
        self.push(SceneObject::Line {
            from,
            to,
            color: self.style.segment_color.clone(),
        })
    }
}

/// Render `layout` into a fresh [`Scene`] styled by `style`.
pub fn scene(layout: &Layout, style: &RenderConfig) -> Scene {
    let mut builder = SceneBuilder::new(style.clone());
    render(layout, &mut builder);
    builder.finish()
}
