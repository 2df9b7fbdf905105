use colored::Colorize;
use tracing::debug;

use lbc_bundle::load_document;
use lbc_diff::{candidate_files, check_bundle, check_candidate};

use crate::cli::{Cli, OutputFormat};
use crate::render::render_report;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let reference_path = cli.dir.join(&cli.reference);
    let reference = load_document(&reference_path)?;
    debug!(reference = %reference_path.display(), "loaded reference locale");

    match cli.format {
        OutputFormat::Json => {
            let reports = check_bundle(&reference, &cli.reference, &cli.dir)?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            // Stream one block per candidate; a load failure mid-batch
            // leaves the blocks already printed on the console.
            let mut checked = 0usize;
            let mut drifted = 0usize;
            for (file_name, path) in candidate_files(&cli.dir, &cli.reference)? {
                let report = check_candidate(&reference, &file_name, &path)?;
                print!("{}", render_report(&report));
                checked += 1;
                if !report.is_clean() {
                    drifted += 1;
                }
            }

            if drifted == 0 {
                println!(
                    "{} {} locale files checked, no drift.",
                    "✓".green().bold(),
                    checked
                );
            } else {
                println!(
                    "{} {} of {} locale files have drifted keys.",
                    "✗".red().bold(),
                    drifted,
                    checked
                );
            }
        }
    }

    Ok(())
}
