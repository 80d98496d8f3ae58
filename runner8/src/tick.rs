//! Loop-iteration counter used to pace the melody sequencer.
//!
//! Elapsed time is approximated by counting loop iterations, there is no
//! clock behind it.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickState {
    /// Budget not used up yet
    Waiting,
    /// Budget reached, counter wrapped back to zero
    Elapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickCounter {
    count: u16,
    budget: u16,
}

impl TickCounter {
    /// Counter elapsing once every `budget` calls to `tick`
    pub fn new(budget: u16) -> Self {
        Self {
            count: 0,
            budget: budget.max(1),
        }
    }

    #[inline]
    pub fn load(&self) -> u16 {
        self.count
    }

    #[inline]
    pub fn budget(&self) -> u16 {
        self.budget
    }

    #[inline]
    pub fn tick(&mut self) -> TickState {
        self.count += 1;
        if self.count < self.budget {
            TickState::Waiting
        } else {
            self.count = 0;
            TickState::Elapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapses_once_per_budget() {
        let mut counter = TickCounter::new(80);
        for _ in 0..79 {
            assert_eq!(counter.tick(), TickState::Waiting);
        }
        assert_eq!(counter.tick(), TickState::Elapsed);
        assert_eq!(counter.load(), 0);
        assert_eq!(counter.tick(), TickState::Waiting);
    }

    #[test]
    fn zero_budget_elapses_every_tick() {
        let mut counter = TickCounter::new(0);
        assert_eq!(counter.budget(), 1);
        assert_eq!(counter.tick(), TickState::Elapsed);
        assert_eq!(counter.tick(), TickState::Elapsed);
    }
}
