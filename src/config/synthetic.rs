//! Synthetic weekly series configuration

pub struct SyntheticConfig {
    /// Points emitted per monthly average
    pub weeks_per_month: usize,
    /// Inclusive bounds of the multiplicative noise applied to each weekly point
    pub noise_low: f64,
    pub noise_high: f64,
    /// Fixed RNG seed. `None` draws a fresh seed from OS entropy on every run.
    pub seed: Option<u64>,
}

pub const SYNTHETIC: SyntheticConfig = SyntheticConfig {
    weeks_per_month: 4,
    noise_low: 0.85,
    noise_high: 1.15,
    seed: None,
};
