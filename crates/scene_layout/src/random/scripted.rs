//! Scripted random source for deterministic tests and fixtures.
use crate::random::{RandomSource, BELOW_ONE};

/// Replays a fixed list of values, wrapping around at the end.
///
/// Values are clamped into `[0, 1)` when the source is built. An empty script
/// always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, BELOW_ONE) })
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always yields `value`.
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    /// Rewind to the first value.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl RandomSource for ScriptedSource {
    fn next(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
