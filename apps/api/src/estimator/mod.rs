// Compensation estimator: static reference tables, factor-multiplier
// curves, narrative selection, and the predict orchestration that composes
// them. Pure computation end to end — handlers are the only async code.

pub mod handlers;
pub mod model;
pub mod multipliers;
pub mod narratives;
pub mod predict;
pub mod tables;
