use nanorand::{Rng, WyRand};

#[derive(Clone)]
pub struct Random {
    generator: WyRand,
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    pub fn generate(&mut self) -> f64 {
        self.generator.generate::<f32>() as f64
    }

    /// Rounds up with probability equal to the fractional part, so that
    /// expected counts survive integer bookkeeping.
    pub fn round(&mut self, value: f64) -> usize {
        if value <= 0.0 {
            return 0;
        }
        let whole = value.floor();
        let fraction = value - whole;
        if fraction > 0.0 && self.generate() < fraction {
            whole as usize + 1
        } else {
            whole as usize
        }
    }
}
