//! Renderable props and the scene that holds them

use crate::source::GeometrySource;

/// One transformable constituent of a prop.
///
/// `source: None` models a part with no mapper attached; such parts are
/// skipped by the exporter.
pub struct Part {
    pub name: String,
    pub visible: bool,
    pub source: Option<Box<dyn GeometrySource>>,
}

impl Part {
    pub fn new(name: impl Into<String>, source: impl GeometrySource + 'static) -> Self {
        Self {
            name: name.into(),
            visible: true,
            source: Some(Box::new(source)),
        }
    }

    /// A part with no geometry source attached.
    pub fn without_source(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            source: None,
        }
    }
}

/// A renderable prop; an assembly expands into multiple parts.
pub struct RenderProp {
    pub visible: bool,
    pub parts: Vec<Part>,
}

impl RenderProp {
    pub fn new(part: Part) -> Self {
        Self {
            visible: true,
            parts: vec![part],
        }
    }

    pub fn assembly(parts: Vec<Part>) -> Self {
        Self {
            visible: true,
            parts,
        }
    }
}

/// The host's top-level renderable-prop collection.
///
/// Props keep their insertion order, so repeated traversals of an unchanged
/// scene enumerate parts identically.
#[derive(Default)]
pub struct Scene {
    pub props: Vec<RenderProp>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_prop(&mut self, prop: RenderProp) {
        self.props.push(prop);
    }

    pub fn props(&self) -> &[RenderProp] {
        &self.props
    }
}
