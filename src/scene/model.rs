use serde::{Deserialize, Serialize};

pub(crate) const ASSEMBLY_VERSION_STR: &str = "1";

fn default_version() -> String {
    ASSEMBLY_VERSION_STR.to_owned()
}

fn default_explode_distance() -> f64 {
    200.0
}

fn default_duration_ms() -> f64 {
    1000.0
}

fn default_delay_ms() -> f64 {
    300.0
}

fn default_easing() -> String {
    "in_out_cubic".to_owned()
}

fn default_scale() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    1.0
}

/// The JSON-facing, human-edited assembly configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AssemblyDef {
    #[serde(default = "default_version")]
    pub(crate) version: String,
    #[serde(default)]
    pub(crate) timing: TimingDef,
    /// Base explosion distance; per-component overrides take precedence.
    #[serde(default = "default_explode_distance")]
    pub(crate) explode_distance: f64,
    /// Animation order: index 0 assembles first.
    pub(crate) components: Vec<ComponentDef>,
}

/// Global timing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TimingDef {
    #[serde(default = "default_duration_ms")]
    pub(crate) duration_ms: f64,
    #[serde(default = "default_delay_ms")]
    pub(crate) delay_ms: f64,
    /// Easing name; unknown names fall back to `in_out_cubic`.
    #[serde(default = "default_easing")]
    pub(crate) easing: String,
}

impl Default for TimingDef {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            delay_ms: default_delay_ms(),
            easing: default_easing(),
        }
    }
}

/// One configured component of the assembly sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDef {
    /// Asset filename; also the stage lookup key.
    pub filename: String,
    /// Display name; defaults to the filename.
    #[serde(default)]
    pub name: Option<String>,
    /// Direction the component arrives from. Magnitude scales the offset.
    pub direction: DirectionDef,
    /// Per-component explosion distance override.
    #[serde(default)]
    pub explode_distance: Option<f64>,
    /// Uniform scale (layered variant).
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Rotation in degrees (layered variant).
    #[serde(default)]
    pub rotation_deg: f64,
    /// Stacking order (layered variant); defaults to the sequence index.
    #[serde(default)]
    pub z_index: Option<i32>,
    /// Opacity in `[0, 1]` (layered variant).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl ComponentDef {
    /// The name shown to users: `name` when configured, else the filename.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.filename)
    }
}

/// Arrival direction with two or three axes.
///
/// Deserializes from `[x, y]`, `[x, y, z]`, `{"x": …, "y": …}` or
/// `{"x": …, "y": …, "z": …}`. The layered variant ignores `z`; the solid
/// variant treats a missing `z` as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionDef {
    /// Horizontal axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// Depth axis (solid variant only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl<'de> Deserialize<'de> for DirectionDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr3([f64; 3]),
            Arr2([f64; 2]),
            Obj {
                x: f64,
                y: f64,
                #[serde(default)]
                z: Option<f64>,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr3([x, y, z]) => Ok(Self { x, y, z: Some(z) }),
            Repr::Arr2([x, y]) => Ok(Self { x, y, z: None }),
            Repr::Obj { x, y, z } => Ok(Self { x, y, z }),
        }
    }
}

impl DirectionDef {
    /// All axes, with `z` defaulted to `0`.
    pub fn xyz(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z.unwrap_or(0.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
