use super::logic::InputTap;
use crate::error::{CircuitError, Result};
use serde::{Deserialize, Serialize};

/// Per-column flags marking which columns of row 0 are observed outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTaps(Vec<bool>);

impl OutputTaps {
    #[must_use]
    pub fn new(taps: Vec<bool>) -> Self {
        Self(taps)
    }

    /// Taps only the given columns. Columns past `size` are ignored.
    #[must_use]
    pub fn columns(size: usize, columns: &[usize]) -> Self {
        let mut taps = vec![false; size];
        for &c in columns {
            if let Some(t) = taps.get_mut(c) {
                *t = true;
            }
        }
        Self(taps)
    }

    #[inline]
    #[must_use]
    pub fn is_tapped(&self, x: usize) -> bool {
        self.0.get(x).copied().unwrap_or(false)
    }

    /// Indices of tapped columns, ascending.
    pub fn tapped(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(x, t)| t.then_some(x))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Per-column choice of physical input feeding the input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTaps(Vec<InputTap>);

impl InputTaps {
    #[must_use]
    pub fn new(taps: Vec<InputTap>) -> Self {
        Self(taps)
    }

    /// Repeats `pattern` across `size` columns, e.g. `[A, B]` gives `ABAB...`.
    #[must_use]
    pub fn repeating(size: usize, pattern: &[InputTap]) -> Self {
        if pattern.is_empty() {
            return Self(vec![InputTap::A; size]);
        }
        Self(pattern.iter().copied().cycle().take(size).collect())
    }

    #[inline]
    #[must_use]
    pub fn tap(&self, x: usize) -> InputTap {
        self.0[x]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[InputTap] {
        &self.0
    }
}

/// Output and input taps for one grid size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapAssignment {
    pub outputs: OutputTaps,
    pub inputs: InputTaps,
}

impl TapAssignment {
    /// Pairs the two tap arrays, requiring both to span `size` columns.
    pub fn new(size: usize, outputs: OutputTaps, inputs: InputTaps) -> Result<Self> {
        if outputs.len() != size {
            return Err(CircuitError::InvalidTaps {
                expected: size,
                actual: outputs.len(),
            });
        }
        if inputs.len() != size {
            return Err(CircuitError::InvalidTaps {
                expected: size,
                actual: inputs.len(),
            });
        }
        Ok(Self { outputs, inputs })
    }

    /// Output at column 0, inputs alternating A/B starting with A.
    #[must_use]
    pub fn standard(size: usize) -> Self {
        Self {
            outputs: OutputTaps::columns(size, &[0]),
            inputs: InputTaps::repeating(size, &[InputTap::A, InputTap::B]),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.outputs.len()
    }
}
