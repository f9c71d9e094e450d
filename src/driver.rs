//! Batch driver: gathers packages from the command line and prints one
//! summary per package, stopping at the first package that cannot be built.

use crate::cli::Cli;
use crate::dlog;
use crate::error::TrackerError;
use crate::package::{DEFAULT_PACKAGES, read_package, supported_codes};
use crate::types::Package;
use crate::utils;
use anyhow::{Context, Result};
use std::io::Write;

/// Packages from `--file` first, then `--package` ones, or the built-in demo
/// packages when neither is given.
pub fn collect_packages(cli: &Cli) -> Result<Vec<Package>> {
    let mut packages = Vec::new();

    if let Some(path) = &cli.file {
        packages.extend(utils::load_packages_file(path)?);
    }
    for arg in &cli.packages {
        packages.push(utils::parse_package_arg(arg)?);
    }

    if cli.file.is_none() && cli.packages.is_empty() {
        tracing::info!("no packages given; using built-in demo packages");
        packages.extend(
            DEFAULT_PACKAGES
                .iter()
                .map(|(code, data)| Package::new(*code, data.to_vec())),
        );
    }

    Ok(packages)
}

/// Write one summary line per package to `out`.
///
/// Lines of packages before a failing one are already written when the error
/// is returned.
pub fn run<W: Write>(packages: &[Package], json: bool, out: &mut W) -> Result<()> {
    dlog!("mode={} packages={}", if json { "json" } else { "text" }, packages.len());

    for (i, pkg) in packages.iter().enumerate() {
        let training = read_package(&pkg.code, &pkg.data)
            .map_err(|err| match err {
                TrackerError::UnknownWorkoutType(_) => anyhow::Error::new(err).context(format!(
                    "supported codes: {}",
                    supported_codes().join(", ")
                )),
                other => anyhow::Error::new(other),
            })
            .with_context(|| format!("Package #{i} ({})", pkg.code))?;
        let info = training.show_training_info();

        if json {
            writeln!(out, "{}", info.to_json())?;
        } else {
            writeln!(out, "{info}")?;
        }
    }

    tracing::info!(packages = packages.len(), "done");
    Ok(())
}
