//! Configuration for circuit generation and analysis.
//!
//! Maps to an optional `cellgate.toml`; every section falls back to the
//! defaults used for the evolved 64×64 circuits.
//!
//! ## Example `cellgate.toml`
//!
//! ```toml
//! [grid]
//! size = 64
//! seed_column = 32
//! seed_symbol = 1
//!
//! [taps]
//! output_columns = [0]
//! input_pattern = "AB"
//!
//! [budget]
//! connectivity = 16
//! resolution = 16
//! ```

use anyhow::Context;
use cellgate_data::{
    CircuitError, GateCode, InputTap, InputTaps, OutputTaps, Row, TapAssignment, COLOR,
    DEFAULT_GRID_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid dimensions and the seed row that starts the automaton.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub size: usize,
    pub seed_column: usize,
    pub seed_symbol: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed_column: DEFAULT_GRID_SIZE / 2,
            seed_symbol: GateCode::PassLeft.symbol(),
        }
    }
}

/// Output and input tap layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TapConfig {
    /// Tapped columns of row 0.
    pub output_columns: Vec<usize>,
    /// Input letters repeated across the input row, e.g. `"AB"` gives `ABAB...`.
    pub input_pattern: String,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            output_columns: vec![0],
            input_pattern: "AB".to_string(),
        }
    }
}

/// Relaxation pass limits for the two analysis phases.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BudgetConfig {
    pub connectivity: u32,
    pub resolution: u32,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        // 1024 row updates over a 64-row grid.
        Self {
            connectivity: 16,
            resolution: 16,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub taps: TapConfig,
    pub budget: BudgetConfig,
}

impl AppConfig {
    /// Config for a `size`×`size` grid with the seed and taps scaled to match.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            grid: GridConfig {
                size,
                seed_column: size / 2,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let size = self.grid.size;
        if size == 0 || size > 4096 {
            anyhow::bail!("grid.size must be between 1 and 4096, got {size}");
        }
        if self.grid.seed_column >= size {
            anyhow::bail!(
                "grid.seed_column {} is outside the {size}-column grid",
                self.grid.seed_column
            );
        }
        if self.grid.seed_symbol as usize >= COLOR {
            anyhow::bail!(
                "grid.seed_symbol must be in [0, {COLOR}), got {}",
                self.grid.seed_symbol
            );
        }
        if self.taps.output_columns.is_empty() {
            anyhow::bail!("taps.output_columns must name at least one column");
        }
        if let Some(col) = self.taps.output_columns.iter().find(|c| **c >= size) {
            anyhow::bail!("taps.output_columns entry {col} is outside the {size}-column grid");
        }
        if self.taps.input_pattern.is_empty()
            || self
                .taps
                .input_pattern
                .chars()
                .any(|c| InputTap::from_char(c).is_none())
        {
            anyhow::bail!(
                "taps.input_pattern must be a non-empty string of A/B, got {:?}",
                self.taps.input_pattern
            );
        }
        if self.budget.connectivity == 0 || self.budget.resolution == 0 {
            anyhow::bail!("budget.connectivity and budget.resolution must be positive");
        }
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or returns the defaults when it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// The seed row described by `[grid]`.
    ///
    /// Fails on a `seed_symbol` outside the gate alphabet, so configs that
    /// skipped [`AppConfig::validate`] are still rejected.
    pub fn seed_row(&self) -> Result<Row, CircuitError> {
        let gate = GateCode::from_symbol(self.grid.seed_symbol).ok_or_else(|| {
            CircuitError::row(
                self.grid.size,
                format!("seed symbol {}", self.grid.seed_symbol),
            )
        })?;
        Ok(Row::seed(self.grid.size, self.grid.seed_column, gate))
    }

    /// The tap layout described by `[taps]`.
    #[must_use]
    pub fn tap_assignment(&self) -> TapAssignment {
        let size = self.grid.size;
        let pattern: Vec<InputTap> = self
            .taps
            .input_pattern
            .chars()
            .filter_map(InputTap::from_char)
            .collect();
        TapAssignment {
            outputs: OutputTaps::columns(size, &self.taps.output_columns),
            inputs: InputTaps::repeating(size, &pattern),
        }
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hasher.update(format!("{:?}", self.taps).as_bytes());
        hasher.update(format!("{:?}", self.budget).as_bytes());
        hex::encode(hasher.finalize())
    }
}
