use once_cell::sync::Lazy;
use square::Square;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::FIXTURE_SIDE;

static SUITE_BUILDS: AtomicUsize = AtomicUsize::new(0);

// Built on first access, then shared by every test in the binary.
static SUITE_SQUARE: Lazy<Square> = Lazy::new(|| {
    SUITE_BUILDS.fetch_add(1, Ordering::SeqCst);
    Square::new(FIXTURE_SIDE)
});

/// Suite-level setup: the same square for every test that asks for it.
pub fn suite_square() -> &'static Square {
    &SUITE_SQUARE
}

/// How many times the suite square has been built so far (0 or 1).
pub fn suite_builds() -> usize {
    SUITE_BUILDS.load(Ordering::SeqCst)
}

/// Per-test setup: a new square on every call.
pub fn fresh_square() -> Square {
    Square::new(FIXTURE_SIDE)
}
