//! Lock session state machine.
//!
//! Pure data in, events out. The caller supplies this tick's contacts (every
//! live body inside sensor range, plus the held target wherever it is) and
//! the session advances:
//!
//! 1. auto-acquire the best candidate when idle,
//! 2. re-check the held target against the break limits,
//! 3. run the lock timer,
//! 4. apply a manual cycle request.
//!
//! The break angle is wider than the acquisition angle, so a held target
//! tolerates more drift than a fresh acquisition allows.

use std::fmt::Debug;

use foxtwo_core::config::LockConfig;
use foxtwo_core::constants::TIMER_EPSILON;
use foxtwo_core::enums::{BreakReason, LockState};

use crate::selection::{best_candidate, next_candidate, Contact};

/// Session tuning, copied out of `LockConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockParams {
    pub max_range: f64,
    pub lock_angle_deg: f64,
    pub break_angle_deg: f64,
    pub required_secs: f64,
    pub tone_interval_slow: f64,
    pub tone_interval_fast: f64,
}

impl From<&LockConfig> for LockParams {
    fn from(config: &LockConfig) -> Self {
        Self {
            max_range: config.max_range_m,
            lock_angle_deg: config.lock_angle_deg,
            break_angle_deg: config.break_angle_deg,
            required_secs: config.lock_time_secs,
            tone_interval_slow: config.tone_interval_slow_secs,
            tone_interval_fast: config.tone_interval_fast_secs,
        }
    }
}

impl Default for LockParams {
    fn default() -> Self {
        Self::from(&LockConfig::default())
    }
}

/// Output of a session update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LockEvent<H> {
    /// A new target was selected and the timer restarted.
    Acquiring { target: H },
    /// Periodic tone while acquiring.
    LockingTick { progress: f64 },
    LockAchieved { target: H },
    LockBroken { target: H, reason: BreakReason },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase<H> {
    Idle,
    Acquiring { target: H, elapsed: f64 },
    Locked { target: H, elapsed: f64 },
}

/// One shooter's engagement of a single target.
///
/// `Locked` always carries its target, so a lock without a target is
/// unrepresentable.
#[derive(Debug, Clone)]
pub struct LockSession<H> {
    params: LockParams,
    phase: Phase<H>,
    since_tone: f64,
}

impl<H: Copy + Ord + Debug> LockSession<H> {
    pub fn new(params: LockParams) -> Self {
        Self {
            params,
            phase: Phase::Idle,
            since_tone: 0.0,
        }
    }

    pub fn params(&self) -> &LockParams {
        &self.params
    }

    pub fn state(&self) -> LockState {
        match self.phase {
            Phase::Idle => LockState::Idle,
            Phase::Acquiring { .. } => LockState::Acquiring,
            Phase::Locked { .. } => LockState::Locked,
        }
    }

    pub fn target(&self) -> Option<H> {
        match self.phase {
            Phase::Idle => None,
            Phase::Acquiring { target, .. } | Phase::Locked { target, .. } => Some(target),
        }
    }

    /// Seconds spent on the current target.
    pub fn elapsed(&self) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Acquiring { elapsed, .. } | Phase::Locked { elapsed, .. } => elapsed,
        }
    }

    /// Acquisition progress in [0, 1]. This is the lock quality a launch freezes.
    pub fn progress(&self) -> f64 {
        match self.phase {
            Phase::Locked { .. } => 1.0,
            _ => (self.elapsed() / self.params.required_secs).clamp(0.0, 1.0),
        }
    }

    /// Advance one tick.
    pub fn update(
        &mut self,
        contacts: &[Contact<H>],
        dt: f64,
        cycle_requested: bool,
    ) -> Vec<LockEvent<H>> {
        let mut events = Vec::new();

        if matches!(self.phase, Phase::Idle) {
            let in_range = self.in_range(contacts);
            if let Some(target) = best_candidate(&in_range, self.params.lock_angle_deg) {
                log::debug!("acquiring {target:?}");
                self.begin(target);
                events.push(LockEvent::Acquiring { target });
            }
        }

        if let Some(target) = self.target() {
            if let Some(reason) = self.break_reason(target, contacts) {
                log::info!("lock on {target:?} broken: {reason:?}");
                self.reset();
                events.push(LockEvent::LockBroken { target, reason });
            }
        }

        if let Phase::Acquiring { target, elapsed } = self.phase {
            let elapsed = elapsed + dt;
            if elapsed + TIMER_EPSILON >= self.params.required_secs {
                log::info!("locked {target:?} after {elapsed:.2}s");
                self.phase = Phase::Locked { target, elapsed };
                events.push(LockEvent::LockAchieved { target });
            } else {
                self.phase = Phase::Acquiring { target, elapsed };
                self.since_tone += dt;
                let progress = self.progress();
                if self.since_tone + TIMER_EPSILON >= self.tone_interval(progress) {
                    self.since_tone = 0.0;
                    events.push(LockEvent::LockingTick { progress });
                }
            }
        }

        if cycle_requested {
            if let Some(target) = self.cycle(contacts) {
                events.push(LockEvent::Acquiring { target });
            }
        }

        events
    }

    /// Select the next candidate after the current target and restart the
    /// timer, whatever the current state. No-op without candidates.
    pub fn cycle(&mut self, contacts: &[Contact<H>]) -> Option<H> {
        let in_range = self.in_range(contacts);
        let next = next_candidate(&in_range, self.params.lock_angle_deg, self.target())?;
        log::debug!("cycled to {next:?}");
        self.begin(next);
        Some(next)
    }

    /// Drop the target and return to idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.since_tone = 0.0;
    }

    fn begin(&mut self, target: H) {
        self.phase = Phase::Acquiring {
            target,
            elapsed: 0.0,
        };
        self.since_tone = 0.0;
    }

    /// Contacts close enough to be selected. A held target may be reported
    /// beyond max range so that it breaks as out of range.
    fn in_range(&self, contacts: &[Contact<H>]) -> Vec<Contact<H>> {
        contacts
            .iter()
            .filter(|c| c.range <= self.params.max_range)
            .copied()
            .collect()
    }

    fn break_reason(&self, target: H, contacts: &[Contact<H>]) -> Option<BreakReason> {
        let Some(contact) = contacts.iter().find(|c| c.handle == target) else {
            return Some(BreakReason::Lost);
        };
        if contact.angle_deg > self.params.break_angle_deg {
            Some(BreakReason::OffBoresight)
        } else if contact.range > self.params.max_range {
            Some(BreakReason::OutOfRange)
        } else {
            None
        }
    }

    /// Tone interval shrinks linearly from slow to fast as progress nears 1.
    fn tone_interval(&self, progress: f64) -> f64 {
        let slow = self.params.tone_interval_slow;
        let fast = self.params.tone_interval_fast;
        slow + (fast - slow) * progress
    }
}
