use crate::animation::timeline::{Placement, TimelineEntry};
use crate::foundation::core::{Vec2, Vec3};
use crate::scene::model::{AssemblyDef, DirectionDef};
use crate::stage::Stage;

/// Maps a configured arrival direction into a variant's position space.
///
/// Implemented for [`Vec2`] (layered variant, `z` ignored) and [`Vec3`]
/// (solid variant, missing `z` treated as `0`). Presentation shells with a
/// custom position type implement this alongside [`crate::Lerp`].
pub trait Arrival: Copy {
    /// The offset `direction * distance`, per axis.
    fn arrival_offset(direction: &DirectionDef, distance: f64) -> Self;

    /// This position displaced by `offset`.
    fn displaced(self, offset: Self) -> Self;
}

impl Arrival for Vec2 {
    fn arrival_offset(direction: &DirectionDef, distance: f64) -> Self {
        Vec2::new(direction.x * distance, direction.y * distance)
    }

    fn displaced(self, offset: Self) -> Self {
        self + offset
    }
}

impl Arrival for Vec3 {
    fn arrival_offset(direction: &DirectionDef, distance: f64) -> Self {
        let (x, y, z) = direction.xyz();
        Vec3::new(x * distance, y * distance, z * distance)
    }

    fn displaced(self, offset: Self) -> Self {
        self + offset
    }
}

/// Resolve every configured component against the stage.
///
/// Produces one entry per component in animation order. The resting position
/// is read from the stage once, here; the exploded position is
/// `resting + direction * distance`, where the per-component distance
/// override beats the assembly-wide base distance. Components the stage
/// cannot resolve get `placement: None` and are skipped during playback.
#[tracing::instrument(skip(def, stage), fields(components = def.components.len()))]
pub(crate) fn resolve_entries<V: Arrival>(
    def: &AssemblyDef,
    stage: &dyn Stage<Pos = V>,
) -> Vec<TimelineEntry<V>> {
    def.components
        .iter()
        .map(|component| {
            let placement = match stage.resting_position(&component.filename) {
                None => {
                    tracing::debug!(
                        id = %component.filename,
                        "no stage target for component, leaving unresolved"
                    );
                    None
                }
                Some(resting) => {
                    let distance = component.explode_distance.unwrap_or(def.explode_distance);
                    let offset = V::arrival_offset(&component.direction, distance);
                    Some(Placement {
                        resting,
                        exploded: resting.displaced(offset),
                    })
                }
            };
            TimelineEntry {
                id: component.filename.clone(),
                name: component.display_name().to_owned(),
                placement,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/resolve.rs"]
mod tests;
