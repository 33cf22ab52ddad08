use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::animation::timeline::{Timeline, TimelineCfg};
use crate::foundation::error::{EsplosoError, EsplosoResult};
use crate::scene::model::{AssemblyDef, ComponentDef};
use crate::scene::resolve::{Arrival, resolve_entries};
use crate::schema::validate::validate_assembly;
use crate::stage::Stage;

/// The assembly configuration boundary object.
///
/// This is the declarative, human-edited description of the explode-and-assemble
/// sequence: component order, arrival directions and distances, timing and
/// easing. It is parsed from JSON, validated, and resolved against a
/// [`Stage`] into a [`Timeline`].
#[derive(Debug, Clone)]
pub struct Assembly {
    def: AssemblyDef,
}

impl Assembly {
    /// Parse an assembly from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> EsplosoResult<Self> {
        let def: AssemblyDef = serde_json::from_reader(r)
            .map_err(|e| EsplosoError::serde(format!("parse assembly JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse an assembly from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> EsplosoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EsplosoError::validation(format!("open assembly JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate the configuration against the assembly schema.
    pub fn validate(&self) -> EsplosoResult<()> {
        validate_assembly(&self.def)
            .map_err(|e| EsplosoError::validation(format!("assembly validation failed:\n{e}")))
    }

    /// The configured components, in animation order.
    ///
    /// The presentation shell reads these to load assets and create targets;
    /// the engine itself only consumes the resolved [`Timeline`].
    pub fn components(&self) -> &[ComponentDef] {
        &self.def.components
    }

    /// Number of configured components.
    pub fn component_count(&self) -> usize {
        self.def.components.len()
    }

    /// Base explosion distance for components without an override.
    pub fn explode_distance(&self) -> f64 {
        self.def.explode_distance
    }

    /// Timing and easing parameters, with the documented easing fallback
    /// applied.
    pub fn timeline_cfg(&self) -> TimelineCfg {
        TimelineCfg {
            duration_ms: self.def.timing.duration_ms,
            delay_ms: self.def.timing.delay_ms,
            ease: Ease::parse(&self.def.timing.easing),
        }
    }

    /// Validate, resolve placements against `stage`, and build the playback
    /// timeline.
    ///
    /// Components the stage cannot resolve are carried as unresolvable
    /// entries (skipped during playback); that is the degrade-gracefully
    /// policy for partially loaded scenes, not an error.
    pub fn timeline<V>(&self, stage: &dyn Stage<Pos = V>) -> EsplosoResult<Timeline<V>>
    where
        V: Arrival + Lerp,
    {
        self.validate()?;
        let entries = resolve_entries(&self.def, stage);
        Timeline::new(entries, self.timeline_cfg())
    }
}
