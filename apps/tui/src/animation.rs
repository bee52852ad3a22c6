use crate::domain::StatKind;
use std::collections::BTreeMap;
use std::time::Duration;

/// One counter step per frame, ~60 per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub const STARTUP_COUNT_DURATION: Duration = Duration::from_millis(1500);
pub const EDIT_COUNT_DURATION: Duration = Duration::from_millis(800);

/// A number counting from `start` to `end` in fixed per-frame increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    end: f64,
    increment: f64,
    pending: Duration,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        let frames = duration.as_secs_f64() / FRAME_INTERVAL.as_secs_f64();
        let increment = (end - start) / frames;

        let mut animation = Self {
            current: start,
            end,
            increment,
            pending: Duration::ZERO,
            finished: false,
        };

        // nothing to count, or no time to count it in
        if !increment.is_finite() || increment == 0.0 {
            animation.settle();
        }

        animation
    }

    /// Feeds elapsed wall time; whole frames worth of it are applied.
    pub fn advance(&mut self, delta: Duration) {
        if self.finished {
            return;
        }

        self.pending += delta;
        while self.pending >= FRAME_INTERVAL && !self.finished {
            self.pending -= FRAME_INTERVAL;
            self.step();
        }
    }

    pub fn step(&mut self) {
        if self.finished {
            return;
        }

        self.current += self.increment;
        if (self.increment > 0.0 && self.current >= self.end)
            || (self.increment < 0.0 && self.current <= self.end)
        {
            self.settle();
        }
    }

    /// Jumps straight to the final value.
    pub fn settle(&mut self) {
        self.current = self.end;
        self.pending = Duration::ZERO;
        self.finished = true;
    }

    pub const fn value(&self) -> f64 {
        self.current
    }

    pub const fn target(&self) -> f64 {
        self.end
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Running counters for the stat cards.
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    counters: BTreeMap<StatKind, CounterAnimation>,
}

impl CounterBoard {
    pub fn start(&mut self, stat: StatKind, from: f64, to: f64, duration: Duration) {
        self.counters
            .insert(stat, CounterAnimation::new(from, to, duration));
    }

    pub fn tick(&mut self, delta: Duration) {
        for counter in self.counters.values_mut() {
            counter.advance(delta);
        }
        self.counters.retain(|_, counter| !counter.is_finished());
    }

    pub fn settle_all(&mut self) {
        self.counters.clear();
    }

    /// Value to display for `stat`: the running counter if any, else `settled`.
    pub fn display_value(&self, stat: StatKind, settled: f64) -> f64 {
        self.counters
            .get(&stat)
            .map_or(settled, CounterAnimation::value)
    }

    pub fn is_animating(&self) -> bool {
        !self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_and_lands_exactly_on_target() {
        let mut counter = CounterAnimation::new(0.0, 94.5, STARTUP_COUNT_DURATION);
        counter.advance(FRAME_INTERVAL);
        assert!(counter.value() > 0.0 && counter.value() < 94.5);

        counter.advance(Duration::from_secs(5));
        assert!(counter.is_finished());
        assert_eq!(counter.value().to_bits(), 94.5_f64.to_bits());
    }

    #[test]
    fn counts_down_without_overshoot() {
        let mut counter = CounterAnimation::new(45890.0, 1234.56, EDIT_COUNT_DURATION);
        let mut frames = 0;
        while !counter.is_finished() {
            counter.step();
            assert!(counter.value() >= 1234.56);
            frames += 1;
        }
        assert!((50..=51).contains(&frames), "took {frames} frames");
        assert_eq!(counter.value(), 1234.56);
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut counter = CounterAnimation::new(0.0, 100.0, Duration::from_millis(160));
        counter.advance(Duration::from_millis(10));
        assert_eq!(counter.value(), 0.0);
        counter.advance(Duration::from_millis(10));
        assert!((counter.value() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn unchanged_or_instant_counters_finish_immediately() {
        let same = CounterAnimation::new(5.0, 5.0, EDIT_COUNT_DURATION);
        assert!(same.is_finished());
        assert_eq!(same.value(), 5.0);

        let instant = CounterAnimation::new(0.0, 5.0, Duration::ZERO);
        assert!(instant.is_finished());
        assert_eq!(instant.value(), 5.0);
    }

    #[test]
    fn settle_jumps_to_target() {
        let mut counter = CounterAnimation::new(0.0, 1247.0, STARTUP_COUNT_DURATION);
        counter.step();
        counter.settle();
        assert_eq!(counter.value(), counter.target());
    }

    #[test]
    fn board_drops_finished_counters() {
        let mut board = CounterBoard::default();
        board.start(StatKind::Orders, 0.0, 328.0, STARTUP_COUNT_DURATION);
        assert!(board.is_animating());
        assert!(board.display_value(StatKind::Orders, 328.0) < 328.0);
        assert_eq!(board.display_value(StatKind::Users, 7.0), 7.0);

        board.tick(Duration::from_secs(2));
        assert!(!board.is_animating());
        assert_eq!(board.display_value(StatKind::Orders, 328.0), 328.0);
    }
}
