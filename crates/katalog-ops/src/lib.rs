pub mod config;
pub mod generate;
pub mod replace;

use std::path::Path;

use katalog_core::aggregator::DependencyAggregator;

use crate::config::{Config, Operation};

/// Run the configured operation for the project at `root`.
///
/// `aggregator` carries the dependencies the host build system declared
/// while evaluating the project; only catalog generation consumes it.
pub fn run(root: &Path, aggregator: DependencyAggregator, config: &Config) -> miette::Result<()> {
    match config.operation {
        Operation::Nothing => Ok(()),
        Operation::GenerateCatalog => generate::generate_catalog(root, aggregator, config),
        Operation::ReplaceFromCatalog => replace::replace_from_catalog(root, config),
    }
}
