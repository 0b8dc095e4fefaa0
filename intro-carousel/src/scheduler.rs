//! Corrective-seek scheduling.
//!
//! On one target platform the paged surface's own re-layout races a seek
//! issued from inside the layout callback, so the corrective seek has to
//! wait one scheduling tick. On the other platform it can run synchronously.
//! Rather than scattering platform conditionals, the choice lives in a
//! [`SeekTiming`] policy consumed by [`SeekScheduler`].
//!
//! A parked task carries no target offset. Navigation can land between the
//! layout event and the tick, and the stale target would then override it,
//! so the caller recomputes the offset from the live navigation state when
//! the task fires.

/// When a corrective seek may be issued relative to the layout event that
/// requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekTiming {
    /// Issue the seek synchronously inside the layout callback.
    Immediate,
    /// Hold the seek until the next scheduling tick.
    NextTick,
}

/// Identifier for a parked task, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(u64);

/// What [`SeekScheduler::schedule`] decided to do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDisposition {
    /// The caller must compute and issue the seek now.
    RunNow,
    /// The seek is parked until the next tick; cancellable via the id.
    Deferred(TaskId),
}

/// Single-slot scheduler for corrective seeks.
///
/// At most one corrective seek is ever outstanding: a resize that lands
/// while another one is parked simply replaces it, since only the latest
/// layout matters. The parked task is bound to component lifetime; unmount
/// cancels it so it can never run against a released surface handle.
#[derive(Debug)]
pub struct SeekScheduler {
    timing: SeekTiming,
    pending: Option<TaskId>,
    next_id: u64,
}

impl SeekScheduler {
    /// Creates a scheduler with the given timing policy.
    pub fn new(timing: SeekTiming) -> Self {
        Self {
            timing,
            pending: None,
            next_id: 0,
        }
    }

    /// Schedules a corrective seek according to the timing policy.
    ///
    /// With [`SeekTiming::Immediate`] the caller issues the seek
    /// synchronously; with [`SeekTiming::NextTick`] a due-marker replaces
    /// any parked one.
    pub fn schedule(&mut self) -> SeekDisposition {
        match self.timing {
            SeekTiming::Immediate => SeekDisposition::RunNow,
            SeekTiming::NextTick => {
                let id = TaskId(self.next_id);
                self.next_id = self.next_id.wrapping_add(1);
                if self.pending.is_some() {
                    tracing::debug!("replacing parked corrective seek");
                }
                self.pending = Some(id);
                SeekDisposition::Deferred(id)
            }
        }
    }

    /// Cancels a specific parked task. Returns whether it was still parked.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.pending {
            Some(pending_id) if pending_id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Takes the parked task that is due this tick, if any.
    pub fn take_due(&mut self) -> Option<TaskId> {
        self.pending.take()
    }

    /// Whether a task is currently parked.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
