/// Easing functions used to map normalized animation progress.
///
/// Every variant satisfies `apply(0.0) == 0.0` and `apply(1.0) == 1.0`
/// exactly; `OutElastic` and `OutBack` overshoot transiently in between.
/// Both playback variants (solid and layered) share this table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out. The default for unknown easing names.
    #[default]
    InOutCubic,
    /// Decaying oscillation toward the end value.
    OutElastic,
    /// Slight overshoot past the end value, then settle.
    OutBack,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutElastic => {
                const C4: f64 = (2.0 * std::f64::consts::PI) / 3.0;
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    (2.0_f64).powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                if t == 0.0 {
                    0.0
                } else {
                    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
                }
            }
        }
    }

    /// Look up an easing by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "in_quad" => Some(Self::InQuad),
            "out_quad" => Some(Self::OutQuad),
            "in_out_quad" => Some(Self::InOutQuad),
            "in_cubic" => Some(Self::InCubic),
            "out_cubic" => Some(Self::OutCubic),
            "in_out_cubic" => Some(Self::InOutCubic),
            "out_elastic" => Some(Self::OutElastic),
            "out_back" => Some(Self::OutBack),
            _ => None,
        }
    }

    /// Resolve an easing name, falling back to [`Ease::InOutCubic`] when the
    /// name is unknown. Never fails.
    pub fn parse(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown easing name, using in_out_cubic");
            Self::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
