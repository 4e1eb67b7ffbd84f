pub mod config;
pub mod error;
pub mod report;
pub mod square;

pub use error::SquareError;
pub use report::Measurements;
pub use square::Square;
