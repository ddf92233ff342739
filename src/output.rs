use indexmap::IndexMap;
use crate::report::AttributionEntry;

pub const REPORT_HEADER: &str = "# Third party library licenses";

/// Render the full attribution file as one in-memory string.
///
/// One block per package: a `##` heading with the package name, the chosen
/// identifier, then the full license text, blank-line separated.
pub fn render_attribution(entries: &[AttributionEntry]) -> String {
    let mut output = String::new();

    output.push_str(REPORT_HEADER);
    output.push_str("\n\n");

    for entry in entries {
        output.push_str(&format!("## {}\n\n", entry.package_name));
        output.push_str(&format!("{}\n\n", entry.license));
        output.push_str(&format!("{}\n\n\n", entry.text));
    }

    output
}

/// Per-identifier counts of the chosen licenses, most common first.
pub fn format_license_summary(entries: &[AttributionEntry]) -> String {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for entry in entries {
        *counts.entry(entry.license.clone()).or_insert(0) += 1;
    }
    counts.sort_by(|_, a, _, b| b.cmp(a));

    let mut output = String::new();
    output.push_str(&format!("License summary ({} packages)\n", entries.len()));
    for (license, count) in &counts {
        output.push_str(&format!("  {:<16} {}\n", license, count));
    }

    output
}
