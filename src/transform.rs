use crate::cancel::CancelFlag;
use crate::errors::FormatError;
use crate::model::{CellCoord, FontLine, FontStyle, FontWeight, StyleDelta, StyleGridSet};
use anyhow::{Result, ensure};

/// Applies `delta` to the in-memory style grids at every detected position.
///
/// Cancellation is cooperative: the flag is tested whenever the position
/// index is a multiple of `total_cols` (roughly once per row's worth of
/// detected cells). A positive signal aborts with `FormatError::Cancelled`;
/// mutations already applied are left in place and must not be committed by
/// the caller.
///
/// `flush` is invoked every `flush_batch_size` mutated cells to bound the
/// divergence between in-memory and host state on large sheets. Flush
/// failures are fatal.
///
/// Returns the number of cells visited (`positions.len()` unless cancelled).
pub fn apply_delta(
    positions: &[CellCoord],
    styles: &mut StyleGridSet,
    delta: &StyleDelta,
    total_cols: usize,
    cancel: &CancelFlag,
    flush_batch_size: usize,
    mut flush: impl FnMut() -> Result<()>,
) -> Result<usize> {
    ensure!(flush_batch_size > 0, "flush_batch_size must be positive");
    if !positions.is_empty() {
        ensure!(
            total_cols > 0,
            "total_cols must be positive when positions are present"
        );
    }

    let mut formatted = 0usize;

    for (i, &coord) in positions.iter().enumerate() {
        if i % total_cols == 0 && cancel.is_cancelled() {
            tracing::warn!(visited = i, "formatting stopped by user cancellation");
            return Err(FormatError::Cancelled.into());
        }

        if let Some(bold) = delta.bold {
            let weight = if bold { FontWeight::Bold } else { FontWeight::Normal };
            styles.font_weights.set(coord, weight);
        }
        if let Some(italic) = delta.italic {
            let style = if italic { FontStyle::Italic } else { FontStyle::Normal };
            styles.font_styles.set(coord, style);
        }
        if let Some(underline) = delta.underline {
            let line = if underline { FontLine::Underline } else { FontLine::None };
            styles.font_lines.set(coord, line);
        }
        // Evaluated after underline on purpose: when both are requested the
        // strikethrough mapping wins for the shared font-line channel.
        if let Some(strikethrough) = delta.strikethrough {
            let line = if strikethrough { FontLine::LineThrough } else { FontLine::None };
            styles.font_lines.set(coord, line);
        }
        if let Some(color) = delta.text_color.as_deref()
            && !color.is_empty()
        {
            styles.font_colors.set(coord, color.to_string());
        }
        if let Some(color) = delta.bg_color.as_deref()
            && !color.is_empty()
        {
            styles.bg_colors.set(coord, color.to_string());
        }

        formatted += 1;

        if formatted % flush_batch_size == 0 {
            flush()?;
        }
    }

    Ok(formatted)
}
