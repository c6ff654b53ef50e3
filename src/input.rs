//! Reading address/wildcard pairs from text.
//!
//! Accepts `ADDRESS MASK`, `ADDRESS/MASK` and ACL style lines such as
//! `permit ip 10.0.1.64 255.0.7.224 any`. Lines are split on whitespace and
//! `/`; the first two dotted tokens are the address and mask and must be
//! whole dotted quads. Blank lines and `#` or `!` comments are skipped.

use crate::error::{Result, UnrollError};
use crate::models::parse_ipv4;
use regex::Regex;
use std::io::BufRead;
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::OnceLock;

/// Regex for a whole token of dot separated numbers, any octet count.
static DOTTED_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_regex() -> &'static Regex {
    DOTTED_REGEX.get_or_init(|| Regex::new(r"^\d+(?:\.\d+)+$").expect("Invalid Regex"))
}

/// Parse one line into an (address, mask) pair, `None` for blanks and comments.
pub fn parse_wildcard_line(line_no: usize, line: &str) -> Result<Option<(Ipv4Addr, Ipv4Addr)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return Ok(None);
    }

    let quads: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|token| get_dotted_regex().is_match(token))
        .collect();
    log::trace!("line {line_no}: quads={quads:?}");

    match quads.as_slice() {
        [addr, mask, ..] => Ok(Some((
            parse_ipv4("address", addr)?,
            parse_ipv4("mask", mask)?,
        ))),
        _ => Err(UnrollError::ParseLine {
            line: line_no,
            text: trimmed.to_string(),
        }),
    }
}

/// Read every pair from `reader`.
pub fn read_wildcards<R: BufRead>(reader: R) -> Result<Vec<(Ipv4Addr, Ipv4Addr)>> {
    let mut pairs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(pair) = parse_wildcard_line(i + 1, &line?)? {
            pairs.push(pair);
        }
    }
    log::info!("Read {} wildcard pairs", pairs.len());
    Ok(pairs)
}

/// Read every pair from the file at `path`.
pub fn read_wildcard_file<P: AsRef<Path>>(path: P) -> Result<Vec<(Ipv4Addr, Ipv4Addr)>> {
    let path = path.as_ref();
    log::info!("Reading wildcards from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_wildcards(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        let pair = parse_wildcard_line(1, "10.12.14.16 0.1.0.1").unwrap();
        assert_eq!(
            pair,
            Some((Ipv4Addr::new(10, 12, 14, 16), Ipv4Addr::new(0, 1, 0, 1)))
        );
    }

    #[test]
    fn test_parse_slash_separated() {
        let pair = parse_wildcard_line(1, "  10.0.1.64/255.0.7.224 ").unwrap();
        assert_eq!(
            pair,
            Some((Ipv4Addr::new(10, 0, 1, 64), Ipv4Addr::new(255, 0, 7, 224)))
        );
    }

    #[test]
    fn test_parse_acl_line() {
        let pair = parse_wildcard_line(3, "access-list 10 permit 10.0.1.64 255.0.7.224").unwrap();
        assert_eq!(
            pair,
            Some((Ipv4Addr::new(10, 0, 1, 64), Ipv4Addr::new(255, 0, 7, 224)))
        );
    }

    #[test]
    fn test_wrong_octet_count_is_rejected() {
        for line in [
            "10.12.14.16.1 0.0.0.0",
            "10.12.14.16 0.1.0.1.7",
            "1.2.3.4.5.6.7.8",
            "10.12.14.16/0.1.0",
            "permit ip 10.0.1.64.9 255.0.7.224",
        ] {
            let err = parse_wildcard_line(1, line).unwrap_err();
            assert!(
                matches!(err, UnrollError::Parse { .. }),
                "'{line}' should fail to parse, got {err:?}"
            );
        }
    }

    #[test]
    fn test_skip_comments_and_blanks() {
        assert_eq!(parse_wildcard_line(1, "").unwrap(), None);
        assert_eq!(parse_wildcard_line(1, "   ").unwrap(), None);
        assert_eq!(parse_wildcard_line(1, "# 10.0.0.0 0.0.0.255").unwrap(), None);
        assert_eq!(parse_wildcard_line(1, "! interface").unwrap(), None);
    }

    #[test]
    fn test_errors() {
        let err = parse_wildcard_line(7, "10.0.0.1").unwrap_err();
        assert!(matches!(err, UnrollError::ParseLine { line: 7, .. }));

        let err = parse_wildcard_line(2, "10.0.0.1 0.0.0.256").unwrap_err();
        assert!(matches!(err, UnrollError::Parse { ref field, .. } if field == "mask"));
    }

    #[test]
    fn test_read_wildcards() {
        let text = "# demo\n10.12.14.16 0.1.0.1\n\n10.12.14.16 0.1.0.0\n";
        let pairs = read_wildcards(text.as_bytes()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].1, Ipv4Addr::new(0, 1, 0, 0));
    }

    #[test]
    fn test_read_wildcard_file_missing() {
        let err = read_wildcard_file("src/tests/test_data/missing.txt").unwrap_err();
        assert!(matches!(err, UnrollError::Io(_)));
    }

    #[test]
    fn test_read_wildcard_file() {
        let pairs = read_wildcard_file("src/tests/test_data/wildcards.txt").unwrap();
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs[0].0, Ipv4Addr::new(10, 12, 14, 16));
        assert_eq!(pairs[7].1, Ipv4Addr::new(255, 0, 7, 224));
    }
}
