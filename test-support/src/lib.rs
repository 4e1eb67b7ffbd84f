pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{fresh_square, suite_builds, suite_square};

/// Side length used by the shared fixtures.
pub const FIXTURE_SIDE: f64 = 21.0;

/// Area expected from a square built with [`FIXTURE_SIDE`].
pub const FIXTURE_AREA: f64 = FIXTURE_SIDE * FIXTURE_SIDE;
