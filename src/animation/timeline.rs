use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::core::TimeMs;
use crate::foundation::error::{EsplosoError, EsplosoResult};
use crate::stage::Stage;

/// Timing and easing parameters for a playback run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineCfg {
    /// Base tween duration per component, in milliseconds.
    pub duration_ms: f64,
    /// Base pause between consecutive components, in milliseconds.
    pub delay_ms: f64,
    /// Easing applied to every component tween.
    pub ease: Ease,
}

impl Default for TimelineCfg {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            delay_ms: 300.0,
            ease: Ease::default(),
        }
    }
}

/// Resting and exploded placement of one component, computed once by the
/// resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<V> {
    /// Where the component sits when fully assembled.
    pub resting: V,
    /// Displaced starting placement: `resting + direction * distance`.
    pub exploded: V,
}

/// One component in playback order.
///
/// `placement` is `None` when the stage could not resolve the component's
/// target; such entries are skipped silently during playback.
#[derive(Clone, Debug)]
pub struct TimelineEntry<V> {
    /// Stage lookup key (the configured filename).
    pub id: String,
    /// Human-readable name reported in [`TimelineEvent::ComponentStarted`].
    pub name: String,
    /// Resolved placement, or `None` for an unresolvable component.
    pub placement: Option<Placement<V>>,
}

/// Lifecycle events emitted by [`Timeline::play`] and [`Timeline::tick`].
///
/// Events are returned in emission order; the shell consumes them instead of
/// registering callbacks.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineEvent {
    /// A component's tween began.
    ComponentStarted {
        /// Index into the configured component sequence.
        index: usize,
        /// The component's display name.
        name: String,
    },
    /// A component reached its resting position (snapped exactly).
    ComponentCompleted {
        /// Index into the configured component sequence.
        index: usize,
    },
    /// The run finished; the timeline is idle again.
    Completed,
}

/// Read-only snapshot of the controller state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineState {
    /// Whether a run is in flight.
    pub is_playing: bool,
    /// Index of the component currently tweening (or about to, during an
    /// inter-component pause). `None` while idle.
    pub current_index: Option<usize>,
    /// Current speed multiplier (`> 0`).
    pub speed_multiplier: f64,
    /// Number of configured components, resolvable or not.
    pub total_components: usize,
}

#[derive(Clone, Copy, Debug)]
struct TweenStep<V> {
    index: usize,
    from: V,
    to: V,
    started_at: TimeMs,
    /// Effective duration, fixed at step start. A later `set_speed` does not
    /// rescale a step already in flight.
    duration_ms: f64,
}

#[derive(Clone, Copy, Debug)]
enum Phase<V> {
    Idle,
    Tween(TweenStep<V>),
    Pause { next: usize, resume_at: TimeMs },
}

/// Sequential explode-and-assemble playback controller.
///
/// The timeline owns no targets and reads no clock: the presentation shell
/// drives it by calling [`Timeline::tick`] with the current time from its
/// redraw loop, and hands in a [`Stage`] for position writes. One component
/// tweens at a time from its exploded to its resting placement; components
/// are separated by a pause; the whole run can be cancelled at any tick.
///
/// State machine: `Idle -> Tween(index) -> Pause(next) -> Tween(next) -> ... -> Idle`.
pub struct Timeline<V> {
    entries: Vec<TimelineEntry<V>>,
    cfg: TimelineCfg,
    speed: f64,
    phase: Phase<V>,
}

impl<V: Lerp + Copy> Timeline<V> {
    /// Create a timeline over resolved entries.
    ///
    /// Fails when the configuration is unusable (non-finite or non-positive
    /// duration, non-finite or negative delay).
    pub fn new(entries: Vec<TimelineEntry<V>>, cfg: TimelineCfg) -> EsplosoResult<Self> {
        if !cfg.duration_ms.is_finite() || cfg.duration_ms <= 0.0 {
            return Err(EsplosoError::animation("duration_ms must be finite and > 0"));
        }
        if !cfg.delay_ms.is_finite() || cfg.delay_ms < 0.0 {
            return Err(EsplosoError::animation("delay_ms must be finite and >= 0"));
        }
        Ok(Self {
            entries,
            cfg,
            speed: 1.0,
            phase: Phase::Idle,
        })
    }

    /// The resolved entries, in playback order.
    pub fn entries(&self) -> &[TimelineEntry<V>] {
        &self.entries
    }

    /// Whether a run is in flight.
    pub fn is_playing(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Snapshot the controller state.
    pub fn state(&self) -> TimelineState {
        let current_index = match self.phase {
            Phase::Idle => None,
            Phase::Tween(step) => Some(step.index),
            Phase::Pause { next, .. } => Some(next),
        };
        TimelineState {
            is_playing: self.is_playing(),
            current_index,
            speed_multiplier: self.speed,
            total_components: self.entries.len(),
        }
    }

    /// Update the speed multiplier for subsequent tween and pause
    /// computations. A tween or pause already in flight keeps its originally
    /// computed duration/resume time.
    ///
    /// Non-finite or non-positive multipliers are ignored.
    pub fn set_speed(&mut self, multiplier: f64) {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            tracing::warn!(multiplier, "ignoring invalid speed multiplier");
            return;
        }
        self.speed = multiplier;
    }

    /// Cancel any in-flight run without emitting events.
    ///
    /// Components are left wherever they are; use the snapshot operations to
    /// force a coherent view.
    pub fn stop_all(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Synchronously force every resolvable component to its exploded
    /// placement, cancelling any in-flight run without events.
    pub fn snapshot_exploded(&mut self, stage: &mut dyn Stage<Pos = V>) {
        self.stop_all();
        self.place_all(stage, |p| p.exploded);
    }

    /// Synchronously force every resolvable component to its resting
    /// placement, cancelling any in-flight run without events.
    pub fn snapshot_assembled(&mut self, stage: &mut dyn Stage<Pos = V>) {
        self.stop_all();
        self.place_all(stage, |p| p.resting);
    }

    /// Start a run at time `now`.
    ///
    /// A silent no-op while already playing. Otherwise every resolvable
    /// component snaps to its exploded placement and the first resolvable
    /// component's tween begins immediately; the returned events carry its
    /// [`TimelineEvent::ComponentStarted`] (or [`TimelineEvent::Completed`]
    /// when nothing is resolvable).
    pub fn play(&mut self, now: TimeMs, stage: &mut dyn Stage<Pos = V>) -> Vec<TimelineEvent> {
        if self.is_playing() {
            return Vec::new();
        }
        self.place_all(stage, |p| p.exploded);
        let mut events = Vec::new();
        self.begin_step(0, now, &mut events);
        events
    }

    /// Advance the run to time `now`, writing interpolated positions through
    /// `stage` and returning lifecycle events in emission order.
    ///
    /// A no-op while idle, so a tick scheduled before [`Timeline::stop_all`]
    /// but delivered after it observes the cancel and does nothing.
    pub fn tick(&mut self, now: TimeMs, stage: &mut dyn Stage<Pos = V>) -> Vec<TimelineEvent> {
        let mut events = Vec::new();
        loop {
            match self.phase {
                Phase::Idle => break,
                Phase::Tween(step) => {
                    let elapsed = now.elapsed_since(step.started_at);
                    let progress = (elapsed / step.duration_ms).clamp(0.0, 1.0);
                    if progress < 1.0 {
                        let eased = self.cfg.ease.apply(progress);
                        let pos = V::lerp(&step.from, &step.to, eased);
                        stage.set_position(&self.entries[step.index].id, pos);
                        break;
                    }
                    // Snap exactly to the resting placement so floating-point
                    // drift never survives a completed tween.
                    stage.set_position(&self.entries[step.index].id, step.to);
                    events.push(TimelineEvent::ComponentCompleted { index: step.index });
                    let next = step.index + 1;
                    if next >= self.entries.len() {
                        self.phase = Phase::Idle;
                        events.push(TimelineEvent::Completed);
                        break;
                    }
                    self.phase = Phase::Pause {
                        next,
                        resume_at: now.advanced_by(self.cfg.delay_ms / self.speed),
                    };
                }
                Phase::Pause { next, resume_at } => {
                    if now < resume_at {
                        break;
                    }
                    self.begin_step(next, now, &mut events);
                }
            }
        }
        events
    }

    /// Begin the tween for the first resolvable entry at or after
    /// `from_index`, skipping unresolvable entries without events. Completes
    /// the run when none remains.
    fn begin_step(&mut self, from_index: usize, now: TimeMs, events: &mut Vec<TimelineEvent>) {
        let mut index = from_index;
        while let Some(entry) = self.entries.get(index) {
            match entry.placement {
                None => {
                    tracing::debug!(id = %entry.id, index, "component has no stage target, skipping");
                    index += 1;
                }
                Some(placement) => {
                    self.phase = Phase::Tween(TweenStep {
                        index,
                        from: placement.exploded,
                        to: placement.resting,
                        started_at: now,
                        duration_ms: self.cfg.duration_ms / self.speed,
                    });
                    events.push(TimelineEvent::ComponentStarted {
                        index,
                        name: entry.name.clone(),
                    });
                    return;
                }
            }
        }
        self.phase = Phase::Idle;
        events.push(TimelineEvent::Completed);
    }

    fn place_all(&self, stage: &mut dyn Stage<Pos = V>, pick: impl Fn(&Placement<V>) -> V) {
        for entry in &self.entries {
            if let Some(placement) = &entry.placement {
                stage.place(&entry.id, pick(placement));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
