use anyhow::Result;
use std::path::PathBuf;

pub fn validate_json_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    if ext.as_deref() != Some("json") {
        anyhow::bail!("File must have a .json extension: {}", path);
    }

    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}

/// Format a scalar with a fixed number of decimals. Negative zero prints as
/// zero.
pub fn format_scalar(value: f64, precision: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", precision, value)
}
