//! Recurring timers owned by control points.
//!
//! Each control point registers its own tasks at setup: one for unit
//! generation and two cosmetic rotations. A task carries the entity handle of
//! the point it acts on. The engine advances the scheduler after the capture
//! pass, so a timer firing never lands in the middle of a point's evaluation.

use std::time::Duration;

use hecs::Entity;

/// Work a timer performs when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Request a new unit if the point belongs to the local faction.
    SpawnUnit { point: Entity },
    /// Step the range ring rotation.
    RotateRing { point: Entity },
    /// Step the halo rotation.
    RotateHalo { point: Entity },
}

impl ScheduledTask {
    pub fn point(&self) -> Entity {
        match self {
            ScheduledTask::SpawnUnit { point }
            | ScheduledTask::RotateRing { point }
            | ScheduledTask::RotateHalo { point } => *point,
        }
    }
}

/// A task that fires every `period` of simulated time.
#[derive(Debug, Clone)]
pub struct RecurringTask {
    pub period: Duration,
    pub task: ScheduledTask,
    accumulated: Duration,
}

impl RecurringTask {
    pub fn new(period: Duration, task: ScheduledTask) -> Self {
        Self {
            period,
            task,
            accumulated: Duration::ZERO,
        }
    }
}

/// Fixed-period timer service.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<RecurringTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recurring task. Zero periods are ignored.
    pub fn register(&mut self, period: Duration, task: ScheduledTask) {
        if period.is_zero() {
            tracing::warn!(?task, "ignoring timer with zero period");
            return;
        }
        self.tasks.push(RecurringTask::new(period, task));
    }

    /// Drop every task bound to `point`. Required before a point entity is
    /// despawned.
    pub fn unregister_point(&mut self, point: Entity) {
        self.tasks.retain(|t| t.task.point() != point);
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Advance all timers by `dt`, appending one entry to `fired` per elapsed
    /// period, in registration order.
    pub fn advance(&mut self, dt: Duration, fired: &mut Vec<ScheduledTask>) {
        for timer in &mut self.tasks {
            timer.accumulated = timer.accumulated.saturating_add(dt);
            while timer.accumulated >= timer.period {
                timer.accumulated -= timer.period;
                fired.push(timer.task);
            }
        }
    }
}
