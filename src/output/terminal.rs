//! Terminal output of unrolled results.

use crate::processing::Unrolled;
use colored::Colorize;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    format!("{:>width$}", value.to_string())
}

/// Build the output lines for one unrolled pair.
///
/// Lists every result when the count is within `print_limit`, otherwise only
/// the summary is given.
pub fn format_unrolled(unrolled: &Unrolled, print_limit: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(unrolled.results.len() + 2);
    lines.push(format!("Unrolling {}/{}", unrolled.address, unrolled.mask));

    if unrolled.count > print_limit {
        log::info!(
            "Eliding {} results (print limit {print_limit})",
            unrolled.count
        );
        lines.push(format!(
            "Results in {} networks: ... and that's a lot",
            unrolled.count
        ));
        return lines;
    }

    lines.extend(unrolled.results.iter().map(|n| n.to_string()));
    lines.push(format!("Results in {} networks", unrolled.count));
    lines
}

/// Print one unrolled pair to stdout.
pub fn print_unrolled(unrolled: &Unrolled, print_limit: usize) {
    for line in format_unrolled(unrolled, print_limit) {
        if line.starts_with("Unrolling") {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
}
