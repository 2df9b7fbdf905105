//! Text rendering of file reports.
//!
//! The per-file block is a stable output contract: the filename header, an
//! optional missing section, an optional extra section, or a single `OK!`
//! line. The missing header carries no trailing colon while the extra
//! header does; that asymmetry is part of the contract.

use lbc_diff::FileReport;

/// Render one report as its per-file console block.
pub fn render_report(report: &FileReport) -> String {
    let mut out = format!("{}:\n", report.file_name);

    if !report.missing.is_empty() {
        out.push_str(&format!("Missing keys in {}\n", report.file_name));
        for path in &report.missing {
            out.push_str(&format!("\t{path}\n"));
        }
    }

    if !report.extra.is_empty() {
        out.push_str(&format!("Extra keys in {}:\n", report.file_name));
        for path in &report.extra {
            out.push_str(&format!("\t{path}\n"));
        }
    }

    if report.is_clean() {
        out.push_str("OK!\n");
    }

    out
}
