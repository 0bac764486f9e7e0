//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the
//! report stays readable.

/// Emit each (ln(x), log10(price)) pair and its residual when fitting the model.
pub const PRINT_FIT_POINTS: bool = false;

/// Emit every synthetic point's ratio and tier while computing zone statistics.
pub const PRINT_ZONE_CLASSIFICATIONS: bool = false;

/// Emit a one-line summary once the synthetic weekly series is generated.
pub const PRINT_SYNTHETIC_SUMMARY: bool = true;
