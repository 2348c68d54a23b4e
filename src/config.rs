use std::time::Duration;

pub const DEFAULT_FLUSH_BATCH_SIZE: usize = 1000;
pub const DEFAULT_CANCEL_TTL: Duration = Duration::from_secs(600);
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

/// Tuning knobs for one formatting run. Defaults reproduce the stock
/// behavior; the CLI exposes overrides.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Invoke the host flush callback every this many mutated cells.
    pub flush_batch_size: usize,
    /// How long a cancel request stays armed before it expires.
    pub cancel_ttl: Duration,
    /// How many scanner matches to report at debug level.
    pub preview_limit: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            flush_batch_size: DEFAULT_FLUSH_BATCH_SIZE,
            cancel_ttl: DEFAULT_CANCEL_TTL,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}
