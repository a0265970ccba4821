//! The per-frame pass and the render-target seam.

/// Recording target for headless runs and tests.
pub mod capture;
/// Frame rendering entry point.
pub mod frame;
/// Render-target trait and the per-node uniform contract.
pub mod target;
