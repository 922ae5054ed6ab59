/// Fixed-period frame pacing
///
/// The scheduled tick moves forward by exactly one period per frame. A frame
/// that finishes early sleeps until its tick; one that overruns starts the
/// next frame straight away. There is no frame skipping, so after a long
/// stall the loop runs back-to-back frames until it is on schedule again.
use std::thread;
use std::time::{Duration, Instant};

pub struct FramePacer {
    next_tick: Instant,
    period: Duration,
}

impl FramePacer {
    /// Starts the schedule now.
    pub fn new(period: Duration) -> Self {
        Self::starting_at(Instant::now(), period)
    }

    pub fn starting_at(start: Instant, period: Duration) -> Self {
        FramePacer {
            next_tick: start,
            period,
        }
    }

    /// Advances to the next tick and returns how long to sleep until it,
    /// or `None` if that tick is already in the past.
    pub fn remaining(&mut self, now: Instant) -> Option<Duration> {
        self.next_tick += self.period;
        self.next_tick.checked_duration_since(now)
    }

    /// Ends the frame, sleeping off whatever is left of the period.
    pub fn wait(&mut self) {
        if let Some(remaining) = self.remaining(Instant::now()) {
            thread::sleep(remaining);
        }
    }
}
