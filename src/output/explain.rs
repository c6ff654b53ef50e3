//! Showing how a wildcard mask splits into bit ranges.

use super::terminal::format_field;
use crate::models::{is_bit_on, BitRange, MAX_LENGTH};
use crate::processing::{find_ranges, split_trailing, variable_width};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Render the 32 mask bits as octets, variable bits highlighted.
pub fn format_mask_bits(mask: u32) -> String {
    (1..=MAX_LENGTH)
        .map(|bit| {
            let cell = if is_bit_on(mask, bit) {
                "1".yellow().bold().to_string()
            } else {
                "0".dimmed().to_string()
            };
            if bit < MAX_LENGTH && bit % 8 == 0 {
                format!("{cell}.")
            } else {
                cell
            }
        })
        .collect()
}

/// Describe one range as a table row.
fn format_range(range: &BitRange, trailing: bool) -> String {
    let role = if trailing {
        format!("trailing, becomes /{}", range.start - 1)
    } else {
        format!("{} values", 1u64 << range.width())
    };
    format!(
        "{bits} {width} {role}",
        bits = format_field(range.to_string(), 12),
        width = format_field(format!("width {}", range.width()), 10),
    )
}

/// Build the explanation lines for `mask`.
pub fn explain_lines(mask: Ipv4Addr) -> Vec<String> {
    let bits = u32::from(mask);
    let (ranges, trailing) = split_trailing(find_ranges(bits));

    let mut lines = vec![format!("Mask {mask} = {}", format_mask_bits(bits))];
    lines.extend(ranges.iter().map(|r| format_range(r, false)));
    if let Some(t) = &trailing {
        lines.push(format_range(t, true));
    }
    let width = variable_width(&ranges);
    lines.push(format!(
        "Enumerates {width} bits: {} {}",
        1u64 << width,
        if trailing.is_some() { "subnets" } else { "hosts" }
    ));
    lines
}

pub fn print_explain(mask: Ipv4Addr) {
    for line in explain_lines(mask) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mask_bits() {
        colored::control::set_override(false);
        assert_eq!(
            format_mask_bits(0x00010001),
            "00000000.00000001.00000000.00000001"
        );
    }

    #[test]
    fn test_explain_lines() {
        colored::control::set_override(false);
        let lines = explain_lines(Ipv4Addr::new(0, 255, 0, 129));
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Mask 0.255.0.129 = 00000000.11111111.00000000.10000001"
        );
        assert!(lines[1].contains("bits 9-16"));
        assert!(lines[1].contains("256 values"));
        assert!(lines[3].contains("trailing, becomes /31"));
        assert_eq!(lines[4], "Enumerates 9 bits: 512 subnets");
    }

    #[test]
    fn test_explain_zero_mask() {
        colored::control::set_override(false);
        let lines = explain_lines(Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Enumerates 0 bits: 1 hosts");
    }
}
