use crate::host::SheetHost;
use crate::model::StyleGridSet;
use anyhow::Result;

/// Writes the final style grids back through the host interface.
///
/// Batching discipline: exactly one bulk write per style attribute, five
/// calls total, each covering the whole target range.
pub fn commit_styles(host: &mut dyn SheetHost, styles: &StyleGridSet) -> Result<()> {
    host.write_font_weights(&styles.font_weights)?;
    host.write_font_styles(&styles.font_styles)?;
    host.write_font_lines(&styles.font_lines)?;
    host.write_font_colors(&styles.font_colors)?;
    host.write_bg_colors(&styles.bg_colors)?;
    Ok(())
}
