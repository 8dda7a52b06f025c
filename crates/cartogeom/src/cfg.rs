//! Tolerance defaults and tuning constants.
//!
//! Policy
//! - The exact predicates (`robust`, `intersect`, `ring`) use no tolerance at all.
//!   The epsilons below only back the fuzzy helpers in `types` and input
//!   validation, never a topological decision.
//! - Defaults are fixed constants; the hull threshold is the one knob callers
//!   may override, through `hull::HullCfg`.

/// Per-axis tolerance for position equality (`types::equals_eps`).
pub const POSITION_EPS: f64 = 1e-6;
/// Tolerance on squared distance for fuzzy proximity (`types::near`).
pub const DISTANCE_SQ_EPS: f64 = 1e-3;
/// Point count above which the hull builder applies the octagon reduction.
pub const HULL_REDUCE_THRESHOLD: usize = 50;
