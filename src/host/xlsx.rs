use crate::host::SheetHost;
use crate::model::{CellCoord, FontLine, FontStyle, FontWeight, Grid, GridContext, StyleGridSet};
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::{Path, PathBuf};
use umya_spreadsheet::{PatternValues, Spreadsheet, Worksheet};

/// Host implementation over an xlsx workbook on disk.
///
/// The active target is one worksheet at its full populated extent. Style
/// reads materialize the five attribute grids up front; style writes walk
/// the whole range once per attribute. `flush` persists the workbook back
/// to its path.
pub struct XlsxHost {
    book: Spreadsheet,
    path: PathBuf,
    sheet_name: String,
}

impl XlsxHost {
    /// Opens a workbook and resolves the active sheet: the named one when
    /// given, otherwise the first sheet in the book.
    pub fn open(path: &Path, sheet: Option<&str>) -> Result<Self> {
        let path = normalize_existing_file(path)?;
        let book = umya_spreadsheet::reader::xlsx::read(&path)
            .with_context(|| format!("failed to open workbook '{}'", path.display()))?;

        let sheet_name = match sheet {
            Some(name) => {
                if book.get_sheet_by_name(name).is_none() {
                    bail!("sheet '{}' not found in '{}'", name, path.display());
                }
                name.to_string()
            }
            None => book
                .get_sheet_collection()
                .first()
                .map(|s| s.get_name().to_string())
                .ok_or_else(|| anyhow!("workbook '{}' has no sheets", path.display()))?,
        };

        Ok(Self {
            book,
            path,
            sheet_name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    fn sheet(&self) -> Result<&Worksheet> {
        self.book
            .get_sheet_by_name(&self.sheet_name)
            .ok_or_else(|| anyhow!("sheet '{}' disappeared from workbook", self.sheet_name))
    }

    fn sheet_mut(&mut self) -> Result<&mut Worksheet> {
        let name = self.sheet_name.clone();
        self.book
            .get_sheet_by_name_mut(&name)
            .ok_or_else(|| anyhow!("sheet '{}' disappeared from workbook", name))
    }

    fn dimensions(&self) -> Result<(usize, usize)> {
        let sheet = self.sheet()?;
        Ok((
            sheet.get_highest_row() as usize,
            sheet.get_highest_column() as usize,
        ))
    }
}

impl SheetHost for XlsxHost {
    fn grid_context(&self) -> Result<GridContext> {
        let (num_rows, num_cols) = self.dimensions()?;
        Ok(GridContext {
            sheet_name: self.sheet_name.clone(),
            num_rows,
            num_cols,
        })
    }

    fn read_content_grid(&self) -> Result<Grid<String>> {
        let (num_rows, num_cols) = self.dimensions()?;
        let sheet = self.sheet()?;

        let mut rows = Vec::with_capacity(num_rows);
        for row in 1..=num_rows as u32 {
            let mut cells = Vec::with_capacity(num_cols);
            for col in 1..=num_cols as u32 {
                let content = match sheet.get_cell((col, row)) {
                    Some(cell) if cell.is_formula() => formula_with_equals(cell.get_formula()),
                    Some(cell) => cell.get_value().to_string(),
                    None => String::new(),
                };
                cells.push(content);
            }
            rows.push(cells);
        }
        Grid::from_rows_with_width(rows, num_cols)
    }

    fn read_style_grid_set(&self) -> Result<StyleGridSet> {
        let (num_rows, num_cols) = self.dimensions()?;
        let sheet = self.sheet()?;

        let mut set = StyleGridSet::uniform(num_rows, num_cols);
        for row in 0..num_rows {
            for col in 0..num_cols {
                let Some(cell) = sheet.get_cell(((col + 1) as u32, (row + 1) as u32)) else {
                    continue;
                };
                let style = cell.get_style();
                let coord = CellCoord::new(row, col);

                if let Some(font) = style.get_font() {
                    if *font.get_bold() {
                        set.font_weights.set(coord, FontWeight::Bold);
                    }
                    if *font.get_italic() {
                        set.font_styles.set(coord, FontStyle::Italic);
                    }
                    if *font.get_strikethrough() {
                        set.font_lines.set(coord, FontLine::LineThrough);
                    } else if !font.get_underline().eq_ignore_ascii_case("none") {
                        set.font_lines.set(coord, FontLine::Underline);
                    }
                    let argb = font.get_color().get_argb();
                    if !argb.is_empty() {
                        set.font_colors.set(coord, argb_to_css(argb));
                    }
                }

                if let Some(fill) = style.get_fill()
                    && let Some(pattern) = fill.get_pattern_fill()
                    && let Some(fg) = pattern.get_foreground_color()
                {
                    let argb = fg.get_argb();
                    if !argb.is_empty() {
                        set.bg_colors.set(coord, argb_to_css(argb));
                    }
                }
            }
        }
        Ok(set)
    }

    fn write_font_weights(&mut self, weights: &Grid<FontWeight>) -> Result<()> {
        let sheet = self.sheet_mut()?;
        for_each_cell(weights, |coord, &weight| {
            // Leave untouched cells unmaterialized when the value is the default.
            let target = ((coord.col + 1) as u32, (coord.row + 1) as u32);
            if weight == FontWeight::Normal && sheet.get_cell(target).is_none() {
                return;
            }
            sheet
                .get_style_mut(target)
                .get_font_mut()
                .set_bold(weight == FontWeight::Bold);
        });
        Ok(())
    }

    fn write_font_styles(&mut self, styles: &Grid<FontStyle>) -> Result<()> {
        let sheet = self.sheet_mut()?;
        for_each_cell(styles, |coord, &style| {
            let target = ((coord.col + 1) as u32, (coord.row + 1) as u32);
            if style == FontStyle::Normal && sheet.get_cell(target).is_none() {
                return;
            }
            sheet
                .get_style_mut(target)
                .get_font_mut()
                .set_italic(style == FontStyle::Italic);
        });
        Ok(())
    }

    fn write_font_lines(&mut self, lines: &Grid<FontLine>) -> Result<()> {
        let sheet = self.sheet_mut()?;
        for_each_cell(lines, |coord, &line| {
            let target = ((coord.col + 1) as u32, (coord.row + 1) as u32);
            if line == FontLine::None && sheet.get_cell(target).is_none() {
                return;
            }
            let font = sheet.get_style_mut(target).get_font_mut();
            font.set_underline(if line == FontLine::Underline {
                "single"
            } else {
                "none"
            });
            font.set_strikethrough(line == FontLine::LineThrough);
        });
        Ok(())
    }

    fn write_font_colors(&mut self, colors: &Grid<String>) -> Result<()> {
        let sheet = self.sheet_mut()?;
        for_each_cell(colors, |coord, color| {
            if color.is_empty() {
                return;
            }
            let target = ((coord.col + 1) as u32, (coord.row + 1) as u32);
            sheet
                .get_style_mut(target)
                .get_font_mut()
                .get_color_mut()
                .set_argb(css_to_argb(color));
        });
        Ok(())
    }

    fn write_bg_colors(&mut self, colors: &Grid<String>) -> Result<()> {
        let sheet = self.sheet_mut()?;
        for_each_cell(colors, |coord, color| {
            if color.is_empty() {
                return;
            }
            let target = ((coord.col + 1) as u32, (coord.row + 1) as u32);
            sheet
                .get_style_mut(target)
                .get_fill_mut()
                .get_pattern_fill_mut()
                .set_pattern_type(PatternValues::Solid)
                .get_foreground_color_mut()
                .set_argb(css_to_argb(color));
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, &self.path)
            .with_context(|| format!("failed to save workbook '{}'", self.path.display()))
    }
}

fn for_each_cell<T>(grid: &Grid<T>, mut apply: impl FnMut(CellCoord, &T)) {
    for (row, cells) in grid.rows().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            apply(CellCoord::new(row, col), value);
        }
    }
}

pub fn normalize_existing_file(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    if !absolute.exists() {
        bail!("file '{}' does not exist", absolute.display());
    }
    if !absolute.is_file() {
        bail!("path '{}' is not a file", absolute.display());
    }
    Ok(fs::canonicalize(&absolute).unwrap_or(absolute))
}

fn formula_with_equals(formula: &str) -> String {
    if formula.starts_with('=') {
        formula.to_string()
    } else {
        format!("={formula}")
    }
}

/// Stored fonts carry ARGB; the style grids carry the CSS-style values the
/// delta supplies. Fully-opaque ARGB maps to `#RRGGBB`, anything else passes
/// through with a `#` prefix.
fn argb_to_css(argb: &str) -> String {
    if argb.len() == 8 && argb[..2].eq_ignore_ascii_case("ff") {
        format!("#{}", &argb[2..])
    } else {
        format!("#{argb}")
    }
}

fn css_to_argb(color: &str) -> String {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() == 6 {
        format!("FF{}", hex.to_ascii_uppercase())
    } else {
        hex.to_ascii_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::{argb_to_css, css_to_argb};

    #[test]
    fn test_color_mapping() {
        assert_eq!(argb_to_css("FFFF0000"), "#FF0000");
        assert_eq!(argb_to_css("80FF0000"), "#80FF0000");
        assert_eq!(css_to_argb("#FF0000"), "FFFF0000");
        assert_eq!(css_to_argb("#ff0000"), "FFFF0000");
        assert_eq!(css_to_argb("80FF0000"), "80FF0000");
    }
}
