pub mod xlsx;

use crate::model::{FontLine, FontStyle, FontWeight, Grid, GridContext, StyleGridSet};
use anyhow::Result;

pub use xlsx::XlsxHost;

/// The host spreadsheet surface the pipeline runs against.
///
/// Reads are bulk: the content grid and the five style grids are fully
/// materialized up front. Writes are bulk per attribute; per-cell host writes
/// are never issued by the core. `flush` forces any buffered host-side state
/// to commit and acts as a synchronization barrier.
pub trait SheetHost {
    /// Resolves the active target, forced to the full extent of the sheet
    /// rather than just its populated cells.
    fn grid_context(&self) -> Result<GridContext>;

    /// Raw cell contents; formula cells render with their leading `=`.
    fn read_content_grid(&self) -> Result<Grid<String>>;

    fn read_style_grid_set(&self) -> Result<StyleGridSet>;

    fn write_font_weights(&mut self, weights: &Grid<FontWeight>) -> Result<()>;
    fn write_font_styles(&mut self, styles: &Grid<FontStyle>) -> Result<()>;
    fn write_font_lines(&mut self, lines: &Grid<FontLine>) -> Result<()>;
    fn write_font_colors(&mut self, colors: &Grid<String>) -> Result<()>;
    fn write_bg_colors(&mut self, colors: &Grid<String>) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}
