//! The target-resolution boundary between the engine and the presentation
//! shell.
//!
//! The shell owns the renderable handles (3D scene nodes, composited image
//! layers); the engine reaches them only through [`Stage`], keyed by the
//! component's configured filename. The engine never loads or constructs
//! handles, and a component the stage cannot resolve is skipped, not an
//! error.

use std::collections::HashMap;

pub mod layer;

/// Mutable position access to the shell's renderable targets.
pub trait Stage {
    /// Position type: [`crate::Vec2`] for the layered variant, [`crate::Vec3`]
    /// for the solid variant.
    type Pos: Copy;

    /// The target's current resting position, read once by the resolver at
    /// construction. `None` when the component has no loaded target.
    fn resting_position(&self, id: &str) -> Option<Self::Pos>;

    /// Write an interpolated position during a tween.
    fn set_position(&mut self, id: &str, pos: Self::Pos);

    /// Place a target during an explode/assemble snapshot.
    ///
    /// Defaults to [`Stage::set_position`]. Stages with static visual
    /// attributes re-assert them here (see [`layer::LayerStage`]), which the
    /// per-frame tween path deliberately never touches.
    fn place(&mut self, id: &str, pos: Self::Pos) {
        self.set_position(id, pos);
    }
}

/// Map-backed stage for headless playback, the CLI, and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStage<V> {
    positions: HashMap<String, V>,
}

impl<V: Copy> MemoryStage<V> {
    /// Empty stage.
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }

    /// Register a target at its resting position.
    pub fn insert(&mut self, id: impl Into<String>, resting: V) {
        self.positions.insert(id.into(), resting);
    }

    /// The target's current position, if registered.
    pub fn position(&self, id: &str) -> Option<V> {
        self.positions.get(id).copied()
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the stage has no targets.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<V: Copy> Stage for MemoryStage<V> {
    type Pos = V;

    fn resting_position(&self, id: &str) -> Option<V> {
        self.positions.get(id).copied()
    }

    fn set_position(&mut self, id: &str, pos: V) {
        if let Some(slot) = self.positions.get_mut(id) {
            *slot = pos;
        }
    }
}
