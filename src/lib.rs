//! Esploso is a deterministic explode-and-assemble playback engine for product
//! configurators.
//!
//! A declarative [`Assembly`] configuration names each component, the
//! direction and distance it arrives from, and global timing/easing. The
//! engine resolves it against a [`Stage`] (the presentation shell's
//! renderable targets) into a [`Timeline`] that tweens one component at a
//! time from its exploded placement to its resting placement, driven by an
//! injected clock:
//!
//! - Load and validate an [`Assembly`]
//! - Build a [`Timeline`] against a [`Stage`]
//! - Call [`Timeline::play`] once and [`Timeline::tick`] from the redraw
//!   loop, consuming the returned [`TimelineEvent`]s
//!
//! Two stage variants ship with the crate: [`MemoryStage`] (headless, any
//! position type) and [`LayerStage`] (2D image layers with static visual
//! attributes). 3D shells implement [`Stage`] over their own scene graph.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod scene;
pub(crate) mod schema;
/// Target-resolution boundary and the bundled stage implementations.
pub mod stage;

pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::Lerp;
pub use crate::animation::timeline::{
    Placement, Timeline, TimelineCfg, TimelineEntry, TimelineEvent, TimelineState,
};
pub use crate::foundation::core::{TimeMs, Vec2, Vec3};
pub use crate::foundation::error::{EsplosoError, EsplosoResult};
pub use crate::scene::assembly::Assembly;
pub use crate::scene::model::{ComponentDef, DirectionDef};
pub use crate::scene::resolve::Arrival;
pub use crate::stage::layer::{Layer, LayerStage, LayerVisual};
pub use crate::stage::{MemoryStage, Stage};
