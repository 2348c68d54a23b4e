use crate::model::{CellCoord, FormulaPositions, Grid};

/// Scans the content grid and returns the coordinates of every formula cell
/// in row-major order.
///
/// A cell qualifies iff its display string is non-empty and starts with `=`.
/// The first `preview_limit` matches are reported at debug level.
pub fn find_formula_cells(contents: &Grid<String>, preview_limit: usize) -> FormulaPositions {
    let mut positions = Vec::new();

    for row in 0..contents.num_rows() {
        for col in 0..contents.num_cols() {
            let coord = CellCoord::new(row, col);
            let value = contents.get(coord);
            if value.starts_with('=') {
                positions.push(coord);
                if positions.len() <= preview_limit {
                    tracing::debug!(
                        row,
                        col,
                        formula = %value,
                        "formula {} detected",
                        positions.len()
                    );
                }
            }
        }
    }

    positions
}
