//! Periodic simulation timer.
//!
//! [`Simulation`] owns the running flag and the handle of the one active
//! timer.  The actual clock lives behind [`Scheduler`] so the UI can back it
//! with a real subscription and tests can drive ticks by hand.

use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info};

/// Opaque handle to a started timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// A source of repeating timers.
pub trait Scheduler {
    /// Start a timer firing every `interval`; returns its handle.
    fn start(&mut self, interval: Duration) -> TimerId;

    /// Cancel a timer.  Unknown handles are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Running state of the sampling loop.
#[derive(Debug, Clone)]
pub struct Simulation {
    running:  bool,
    interval: Duration,
    timer:    Option<TimerId>,
}

impl Simulation {
    pub fn new(interval: Duration) -> Self {
        Self {
            running: false,
            interval,
            timer: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle of the active timer, if any.
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Start ticking.  Returns `false` if already running.
    pub fn start(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.running {
            return false;
        }
        self.timer = Some(scheduler.start(self.interval));
        self.running = true;
        info!("Simulation started ({} ms)", self.interval.as_millis());
        true
    }

    /// Stop ticking.  Returns `false` if already stopped.
    pub fn stop(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if !self.running {
            return false;
        }
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
        self.running = false;
        info!("Simulation stopped");
        true
    }

    /// Flip between running and stopped; returns the new running state.
    pub fn toggle(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.running {
            self.stop(scheduler);
        } else {
            self.start(scheduler);
        }
        self.running
    }

    /// Change the tick cadence.  A running timer is cancelled before its
    /// replacement is started.
    pub fn set_interval(&mut self, interval: Duration, scheduler: &mut impl Scheduler) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        if self.running {
            if let Some(id) = self.timer.take() {
                scheduler.cancel(id);
            }
            self.timer = Some(scheduler.start(interval));
            debug!("Simulation rescheduled ({} ms)", interval.as_millis());
        }
    }
}

/// Deterministic [`Scheduler`] driven by [`ManualScheduler::advance`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    /// Active timers: interval and time accumulated since the last firing.
    timers:  BTreeMap<TimerId, (Duration, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Move the clock forward by `elapsed`, returning one entry per firing
    /// in timer order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        for (id, (interval, acc)) in &mut self.timers {
            if interval.is_zero() {
                continue;
            }
            *acc += elapsed;
            while *acc >= *interval {
                *acc -= *interval;
                fired.push(*id);
            }
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, interval: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, (interval, Duration::ZERO));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn start_and_stop_own_one_timer() {
        let mut sched = ManualScheduler::new();
        let mut sim = Simulation::new(ms(1000));

        assert!(sim.start(&mut sched));
        assert!(!sim.start(&mut sched));
        assert_eq!(sched.active_count(), 1);

        assert!(sim.stop(&mut sched));
        assert!(!sim.stop(&mut sched));
        assert_eq!(sched.active_count(), 0);
        assert!(sched.advance(ms(10_000)).is_empty());
    }

    #[test]
    fn toggle_flips_state() {
        let mut sched = ManualScheduler::new();
        let mut sim = Simulation::new(ms(500));

        assert!(sim.toggle(&mut sched));
        assert!(sim.is_running());
        assert!(!sim.toggle(&mut sched));
        assert!(sim.timer().is_none());
    }

    #[test]
    fn ticks_follow_interval() {
        let mut sched = ManualScheduler::new();
        let mut sim = Simulation::new(ms(250));
        sim.start(&mut sched);

        assert_eq!(sched.advance(ms(100)).len(), 0);
        assert_eq!(sched.advance(ms(150)).len(), 1);
        assert_eq!(sched.advance(ms(1000)).len(), 4);
    }

    #[test]
    fn reschedule_keeps_exactly_one_timer() {
        let mut sched = ManualScheduler::new();
        let mut sim = Simulation::new(ms(1000));
        sim.start(&mut sched);
        let old = sim.timer().unwrap();

        for period in [800, 600, 400, 200] {
            sim.set_interval(ms(period), &mut sched);
            assert_eq!(sched.active_count(), 1);
        }

        let new = sim.timer().unwrap();
        assert_ne!(old, new);
        assert!(!sched.is_active(old));

        let fired = sched.advance(ms(1000));
        assert_eq!(fired.len(), 5);
        assert!(fired.iter().all(|id| *id == new));
    }

    #[test]
    fn interval_change_while_stopped_starts_nothing() {
        let mut sched = ManualScheduler::new();
        let mut sim = Simulation::new(ms(1000));

        sim.set_interval(ms(300), &mut sched);
        assert_eq!(sched.active_count(), 0);
        assert_eq!(sim.interval(), ms(300));

        sim.start(&mut sched);
        assert_eq!(sched.advance(ms(300)).len(), 1);
    }
}
