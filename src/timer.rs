//! The 8-bit count down timers of the chipset.

/// Represents a timer inside of the chip infrastructure, it counts
/// down to zero from what ever number is given.
///
/// The chipset owns two of these, the delay and the sound timer. The
/// cadence is external, the embedder calls
/// [`tick_timers`](crate::chip8::ChipSet::tick_timers) at the rate of
/// [`timer::HERZ`](crate::definitions::timer::HERZ) independently of
/// how fast instructions run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    /// Will create a new timer with the given value.
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    /// Moves the timer down by a single tick, stopping at zero.
    pub fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_down() {
        let mut timer = Timer::new(3);

        timer.tick();
        assert_eq!(timer.get_value(), 2);
        timer.tick();
        assert_eq!(timer.get_value(), 1);
        timer.tick();
        assert_eq!(timer.get_value(), 0);
    }

    #[test]
    fn test_tick_keeps_the_floor() {
        let mut timer = Timer::new(0);

        timer.tick();
        assert_eq!(timer.get_value(), 0);
    }

    #[test]
    fn test_set_value_restarts() {
        let mut timer = Timer::new(0);

        timer.set_value(0xFF);
        assert_eq!(timer.get_value(), 0xFF);

        timer.tick();
        assert_eq!(timer.get_value(), 0xFE);
    }
}
