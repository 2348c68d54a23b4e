use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// A rectangular, row-major block of cells with dimensions fixed for the
/// lifetime of one formatting operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<Vec<T>>,
    num_cols: usize,
}

impl<T> Grid<T> {
    pub fn filled(num_rows: usize, num_cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![vec![value; num_cols]; num_rows],
            num_cols,
        }
    }

    /// Builds a grid from pre-materialized rows. All rows must have the same
    /// width; a zero-row grid has zero columns.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_cols = rows.first().map(Vec::len).unwrap_or(0);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != num_cols {
                bail!(
                    "ragged grid: row {} has {} cells, expected {}",
                    idx,
                    row.len(),
                    num_cols
                );
            }
        }
        Self::from_rows_with_width(rows, num_cols)
    }

    /// Like `from_rows`, but keeps an explicit width so a zero-row grid can
    /// still report its column count.
    pub fn from_rows_with_width(rows: Vec<Vec<T>>, num_cols: usize) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != num_cols {
                bail!(
                    "ragged grid: row {} has {} cells, expected {}",
                    idx,
                    row.len(),
                    num_cols
                );
            }
        }
        Ok(Self {
            cells: rows,
            num_cols,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn get(&self, coord: CellCoord) -> &T {
        &self.cells[coord.row][coord.col]
    }

    pub fn set(&mut self, coord: CellCoord, value: T) {
        self.cells[coord.row][coord.col] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

/// 0-indexed cell position within the target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Ordered formula positions as produced by the scanner, row-major.
pub type FormulaPositions = Vec<CellCoord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FontWeight {
    Bold,
    #[default]
    Normal,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FontStyle {
    Italic,
    #[default]
    Normal,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Italic => "italic",
            Self::Normal => "normal",
        }
    }
}

/// The single line-decoration channel shared by underline and strikethrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FontLine {
    Underline,
    LineThrough,
    #[default]
    None,
}

impl FontLine {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underline => "underline",
            Self::LineThrough => "line-through",
            Self::None => "none",
        }
    }
}

/// Sparse set of requested attribute changes. Absent fields leave the
/// corresponding style grid untouched; present fields overwrite, including
/// explicit `false`. Colors only apply when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDelta {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    #[serde(alias = "textColor")]
    pub text_color: Option<String>,
    #[serde(alias = "bgColor")]
    pub bg_color: Option<String>,
}

impl StyleDelta {
    pub fn is_empty(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.strikethrough.is_none()
            && self.text_color.is_none()
            && self.bg_color.is_none()
    }
}

/// The five parallel style grids for one target range. Invariant: all five
/// stay dimensioned identically to the content grid until final commit, and
/// mutation is always by-coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGridSet {
    pub font_weights: Grid<FontWeight>,
    pub font_styles: Grid<FontStyle>,
    pub font_lines: Grid<FontLine>,
    pub font_colors: Grid<String>,
    pub bg_colors: Grid<String>,
}

impl StyleGridSet {
    /// A set where every attribute holds its default value. Color grids use
    /// the empty string for "no explicit color".
    pub fn uniform(num_rows: usize, num_cols: usize) -> Self {
        Self {
            font_weights: Grid::filled(num_rows, num_cols, FontWeight::Normal),
            font_styles: Grid::filled(num_rows, num_cols, FontStyle::Normal),
            font_lines: Grid::filled(num_rows, num_cols, FontLine::None),
            font_colors: Grid::filled(num_rows, num_cols, String::new()),
            bg_colors: Grid::filled(num_rows, num_cols, String::new()),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.font_weights.num_rows()
    }

    pub fn num_cols(&self) -> usize {
        self.font_weights.num_cols()
    }

    pub fn ensure_dimensions(&self, num_rows: usize, num_cols: usize) -> Result<()> {
        let grids = [
            ("font_weights", self.font_weights.num_rows(), self.font_weights.num_cols()),
            ("font_styles", self.font_styles.num_rows(), self.font_styles.num_cols()),
            ("font_lines", self.font_lines.num_rows(), self.font_lines.num_cols()),
            ("font_colors", self.font_colors.num_rows(), self.font_colors.num_cols()),
            ("bg_colors", self.bg_colors.num_rows(), self.bg_colors.num_cols()),
        ];
        for (name, rows, cols) in grids {
            if rows != num_rows || cols != num_cols {
                bail!(
                    "style grid '{}' is {}x{}, expected {}x{}",
                    name,
                    rows,
                    cols,
                    num_rows,
                    num_cols
                );
            }
        }
        Ok(())
    }
}

/// Resolved target for one operation: the active sheet at its full extent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridContext {
    pub sheet_name: String,
    pub num_rows: usize,
    pub num_cols: usize,
}
