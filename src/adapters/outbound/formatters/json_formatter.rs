use crate::lockfile_scan::domain::ScanResult;
use crate::ports::outbound::ScanFormatter;
use crate::shared::Result;

/// JsonFormatter adapter: the result sequence as indented JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanFormatter for JsonFormatter {
    fn format(&self, results: &[ScanResult]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(results)
            .map_err(|e| anyhow::anyhow!("Failed to serialize scan results to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
