//! Demonstration of the sequence handler over a small product catalog.
//!
//! - [`Config`] read from environment variables
//! - [`Product`] sample entity and [`sample_products`] catalog
//! - [`run`] executing the demonstration queries into a [`Report`]

pub mod config;
pub mod error;
pub mod product;
pub mod report;

pub use config::{Config, LogFormat, OutputFormat};
pub use error::{DemoError, Result};
pub use product::{Product, sample_products};
pub use report::{Report, build_report};

use sequence_handler::SequenceHandler;

/// Runs the demonstration over the sample catalog.
pub fn run(config: &Config) -> Result<Report> {
    let products = SequenceHandler::wrap(sample_products());
    build_report(&products, config)
}
