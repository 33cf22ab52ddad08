//! The layered (2D image) stage variant.

use std::collections::HashMap;

use crate::foundation::core::Vec2;
use crate::scene::model::ComponentDef;
use crate::stage::Stage;

/// Static visual attributes of an image layer, fixed at layer creation.
///
/// Only position is tweened during playback; these attributes are applied
/// when the layer is created and re-asserted by explode/assemble snapshots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerVisual {
    /// Uniform scale factor (`1.0` = natural size).
    pub scale: f64,
    /// Rotation in degrees, clockwise.
    pub rotation_deg: f64,
    /// Stacking order; higher draws in front.
    pub z_index: i32,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl LayerVisual {
    /// Build the visual for a configured component. `order` is the
    /// component's position in the assembly sequence and supplies the
    /// default stacking order when `z_index` is not configured.
    pub fn from_component(def: &ComponentDef, order: usize) -> Self {
        Self {
            scale: def.scale,
            rotation_deg: def.rotation_deg,
            z_index: def.z_index.unwrap_or(order as i32),
            opacity: def.opacity,
        }
    }
}

/// One composited image layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    /// Current translation in pixels, relative to the assembled position.
    pub position: Vec2,
    /// Stacking order as currently applied.
    pub z_index: i32,
    /// Opacity as currently applied.
    pub opacity: f64,
    visual: LayerVisual,
}

impl Layer {
    /// Create a layer at the assembled origin with `visual` applied.
    pub fn new(visual: LayerVisual) -> Self {
        Self {
            position: Vec2::ZERO,
            z_index: visual.z_index,
            opacity: visual.opacity,
            visual,
        }
    }

    /// The configured visual (scale and rotation never change after
    /// creation; z-order and opacity are re-asserted from here at
    /// snapshots).
    pub fn visual(&self) -> &LayerVisual {
        &self.visual
    }
}

/// The layered (2D image) stage: one [`Layer`] per component, keyed by
/// filename.
///
/// Layers rest at the origin; the exploded placement is the configured
/// arrival offset away. The presentation shell renders the records however
/// it likes (CSS transforms, a compositor, a test assertion).
#[derive(Clone, Debug, Default)]
pub struct LayerStage {
    layers: HashMap<String, Layer>,
}

impl LayerStage {
    /// Empty stage.
    pub fn new() -> Self {
        Self {
            layers: HashMap::new(),
        }
    }

    /// Create a layer for every component of an assembly, in sequence order,
    /// resting at the origin.
    pub fn from_components<'a>(components: impl IntoIterator<Item = &'a ComponentDef>) -> Self {
        let mut stage = Self::new();
        for (order, def) in components.into_iter().enumerate() {
            stage.add_layer(def.filename.clone(), LayerVisual::from_component(def, order));
        }
        stage
    }

    /// Register a layer resting at the origin.
    pub fn add_layer(&mut self, id: impl Into<String>, visual: LayerVisual) {
        self.layers.insert(id.into(), Layer::new(visual));
    }

    /// Look up a layer.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }

    /// Mutable access for the shell (e.g. fading a layer out).
    pub fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.get_mut(id)
    }

    /// Iterate layers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Layer)> {
        self.layers.iter().map(|(id, layer)| (id.as_str(), layer))
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stage has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Stage for LayerStage {
    type Pos = Vec2;

    fn resting_position(&self, id: &str) -> Option<Vec2> {
        self.layers.get(id).map(|layer| layer.position)
    }

    fn set_position(&mut self, id: &str, pos: Vec2) {
        if let Some(layer) = self.layers.get_mut(id) {
            layer.position = pos;
        }
    }

    fn place(&mut self, id: &str, pos: Vec2) {
        if let Some(layer) = self.layers.get_mut(id) {
            layer.position = pos;
            layer.z_index = layer.visual.z_index;
            layer.opacity = layer.visual.opacity;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/layer.rs"]
mod tests;
