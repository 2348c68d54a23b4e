use crate::cancel::CancelFlag;
use crate::config::FormatterConfig;
use crate::errors::FormatError;
use crate::host::XlsxHost;
use crate::tools::{self, FormatParams};
use anyhow::Result;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub async fn run(
    file: PathBuf,
    sheet: Option<String>,
    styles: String,
    flush_batch_size: usize,
    cancel_ttl_secs: u64,
) -> Result<Value> {
    let styles_value: Value = serde_json::from_str(&styles)
        .map_err(|e| FormatError::InvalidInput(format!("--styles is not valid JSON: {e}")))?;

    let config = FormatterConfig {
        flush_batch_size,
        cancel_ttl: Duration::from_secs(cancel_ttl_secs),
        ..FormatterConfig::default()
    };

    let cancel = Arc::new(CancelFlag::new(config.cancel_ttl));
    let signal_flag = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let message = signal_flag.cancel();
            tracing::warn!("{message}");
        }
    });

    let response = tokio::task::spawn_blocking(move || {
        let mut host = XlsxHost::open(&file, sheet.as_deref())?;
        tools::format_formulas(
            &mut host,
            FormatParams {
                styles: styles_value,
            },
            &config,
            &cancel,
        )
    })
    .await??;

    Ok(serde_json::to_value(response)?)
}
