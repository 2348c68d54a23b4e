use crate::config::FormatterConfig;
use crate::host::XlsxHost;
use crate::tools::{self, ScanParams};
use anyhow::Result;
use serde_json::Value;
use std::path::PathBuf;

pub async fn run(file: PathBuf, sheet: Option<String>, max_ranges: Option<usize>) -> Result<Value> {
    let response = tokio::task::spawn_blocking(move || {
        let host = XlsxHost::open(&file, sheet.as_deref())?;
        tools::scan_formulas(
            &host,
            ScanParams { max_ranges },
            &FormatterConfig::default(),
        )
    })
    .await??;

    Ok(serde_json::to_value(response)?)
}
