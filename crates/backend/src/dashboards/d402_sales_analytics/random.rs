use rand::Rng;

/// Source of uniform draws for the synthetic sales data.
///
/// Production wraps a thread-local RNG, tests plug in scripted values.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// Uniform integer in `[low, high)`, `low < high`
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        let span = (high - low) as f64;
        // floor keeps the upper bound exclusive; min guards a unit draw of exactly 1.0
        low + ((self.next_unit() * span).floor() as u32).min(high - low - 1)
    }
}

/// Adapter from any `rand::Rng` to [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread_local() -> Self {
        RngSource(rand::thread_rng())
    }
}

/// Replays a fixed list of unit draws, cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
