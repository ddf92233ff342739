use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};

use license_attribution::bundle::BundleRunner;
use license_attribution::config::load_config;
use license_attribution::output::{format_license_summary, render_attribution};
use license_attribution::report::build_report;

pub fn handle_generate(output: Option<PathBuf>, quiet: bool, verbose: bool) -> Result<()> {
    // Load per-project overrides from Cargo.toml
    let config = load_config()?;

    let permissible = config.permissible_licenses();
    let output_path = output.unwrap_or_else(|| config.output_path());

    let bundle = BundleRunner::collect()?;

    let entries = match build_report(&bundle, &permissible) {
        Ok(entries) => entries,
        Err(violation) => {
            eprintln!("Error: {}", violation);
            std::process::exit(1);
        }
    };

    // The report is fully buffered and written once; a failed run leaves
    // no partial file.
    let rendered = render_attribution(&entries);
    fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if verbose {
        println!("{}", format_license_summary(&entries));
    }

    if !quiet {
        println!(
            "Wrote {} license blocks to {}",
            entries.len(),
            output_path.display()
        );
    }

    Ok(())
}
