use clap::Parser;

/// Number of sides summed into the perimeter.
pub const PERIMETER_FACTOR: f64 = 4.0;

/// Command line options for the `square` binary.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "square",
    about = "Print the perimeter and area of a square",
    version
)]
pub struct CliConfig {
    /// Length of the square's side
    #[arg(allow_negative_numbers = true)]
    pub side: f64,

    /// Print the measurements as JSON
    #[arg(long)]
    pub json: bool,
}
