//! Uniform random draws used by grid generation.

/// Supplies uniform draws in `[0, 1)`.
///
/// Every `rand` generator is a source, so production code passes a
/// `StdRng` while tests can substitute a [`ScriptedSource`].
pub trait RandomSource {
    fn uniform(&mut self) -> f64;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Integer-valued draw in `[min, max]`, inclusive on both ends.
///
/// A caller passing `min > max` gets a finite value back, never a panic.
pub fn random_int<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    (rng.uniform() * (max - min + 1.0)).floor() + min
}

/// Replays a fixed sequence of draws, wrapping around at the end.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
