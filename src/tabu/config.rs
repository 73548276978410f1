//! Tabu Search configuration.

/// Configuration parameters for the knapsack Tabu Search.
///
/// # Examples
///
/// ```
/// use tabu_knapsack::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_patience(3)
///     .with_seed(42);
/// assert_eq!(config.patience, 3);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of consecutive non-improving passes tolerated before the
    /// search stops.
    pub patience: usize,
    /// Neighbors generated per pass, one per bit position starting at
    /// bit 0. `None` generates one neighbor for every item, covering the
    /// whole packing.
    pub neighbor_count: Option<usize>,
    /// Random seed (None draws one from the operating system).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            patience: 1,
            neighbor_count: None,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of non-improving passes tolerated before stopping.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Sets the number of neighbors generated per pass.
    pub fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = Some(count);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters for internal consistency.
    pub fn validate(&self) -> Result<(), String> {
        if self.neighbor_count == Some(0) {
            return Err("neighbor_count must be at least 1".into());
        }
        Ok(())
    }
}
