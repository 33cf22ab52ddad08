pub use kurbo::Vec2;

/// 3-component position vector used by the solid (3D) variant.
pub type Vec3 = glam::DVec3;

/// A timestamp in milliseconds on the host's clock.
///
/// The engine never reads a clock itself; the presentation shell passes the
/// current time into [`crate::Timeline::play`] and [`crate::Timeline::tick`].
/// Only differences between timestamps are meaningful, so any monotonic
/// origin works (a render loop's frame time, a test's simulated counter).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct TimeMs(pub f64);

impl TimeMs {
    /// This timestamp advanced by `ms` milliseconds.
    pub fn advanced_by(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }

    /// Milliseconds elapsed since `earlier`.
    pub fn elapsed_since(self, earlier: TimeMs) -> f64 {
        self.0 - earlier.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
