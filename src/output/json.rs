//! JSON output of unrolled results.

use crate::processing::Unrolled;
use std::error::Error;

/// Serialize unrolled pairs as a pretty printed JSON array.
pub fn to_json(unrolled: &[Unrolled]) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(unrolled)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

pub fn print_json(unrolled: &[Unrolled]) -> Result<(), Box<dyn Error>> {
    println!("{}", to_json(unrolled)?);
    Ok(())
}
