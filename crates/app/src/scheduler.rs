use dash_core::{Message, Scheduler, TimerId};
use iced::Subscription;
use std::time::Duration;
use tracing::warn;

/// [`Scheduler`] backed by an iced time subscription.
///
/// Holds at most one timer.  While it is active, [`subscription`] yields
/// `iced::time::every(interval)`; iced tears the old stream down and starts
/// the new one whenever the interval changes, so two tick loops never run at
/// once.
///
/// [`subscription`]: SubscriptionScheduler::subscription
#[derive(Debug, Default)]
pub struct SubscriptionScheduler {
    next_id: u64,
    active:  Option<(TimerId, Duration)>,
}

impl SubscriptionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active timer and its interval.
    pub fn active(&self) -> Option<(TimerId, Duration)> {
        self.active
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.active {
            Some((_, interval)) => iced::time::every(interval).map(|_| Message::Tick),
            None => Subscription::none(),
        }
    }
}

impl Scheduler for SubscriptionScheduler {
    fn start(&mut self, interval: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        if let Some((old, _)) = self.active.replace((id, interval)) {
            warn!("Timer {old:?} replaced without being cancelled");
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if matches!(self.active, Some((current, _)) if current == id) {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::Simulation;

    #[test]
    fn start_and_cancel() {
        let mut sched = SubscriptionScheduler::new();
        let id = sched.start(Duration::from_millis(500));
        assert_eq!(sched.active(), Some((id, Duration::from_millis(500))));

        sched.cancel(id);
        assert_eq!(sched.active(), None);
    }

    #[test]
    fn stale_cancel_keeps_current_timer() {
        let mut sched = SubscriptionScheduler::new();
        let old = sched.start(Duration::from_millis(500));
        sched.cancel(old);
        let new = sched.start(Duration::from_millis(800));

        sched.cancel(old);
        assert_eq!(sched.active(), Some((new, Duration::from_millis(800))));
    }

    #[test]
    fn speed_change_swaps_the_single_timer() {
        let mut sched = SubscriptionScheduler::new();
        let mut sim = Simulation::new(Duration::from_millis(1000));
        sim.start(&mut sched);
        sim.set_interval(Duration::from_millis(300), &mut sched);

        let (id, interval) = sched.active().unwrap();
        assert_eq!(Some(id), sim.timer());
        assert_eq!(interval, Duration::from_millis(300));

        sim.stop(&mut sched);
        assert!(sched.active().is_none());
    }
}
