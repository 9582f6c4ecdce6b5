//! Derived color analysis: accessibility, harmony, vision simulation,
//! psychology, and the per-color record that bundles them.

pub mod accessibility;
pub mod harmony;
pub mod psychology;
pub mod record;
pub mod vision;
