use formula_styler::model::{CellCoord, Grid};
use formula_styler::scan::find_formula_cells;

fn grid_of(rows: &[&[&str]]) -> Grid<String> {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    Grid::from_rows(rows).expect("rectangular grid")
}

#[test]
fn zero_row_grid_yields_no_positions() {
    let grid: Grid<String> = Grid::from_rows_with_width(Vec::new(), 4).unwrap();
    assert!(find_formula_cells(&grid, 3).is_empty());
}

#[test]
fn zero_col_grid_yields_no_positions() {
    let grid: Grid<String> = Grid::filled(3, 0, String::new());
    assert!(find_formula_cells(&grid, 3).is_empty());
}

#[test]
fn detects_exactly_the_equals_prefixed_cells() {
    let grid = grid_of(&[&["=A1+B1", "hello"], &["", "=SUM(C1:C2)"]]);
    let positions = find_formula_cells(&grid, 3);
    assert_eq!(
        positions,
        vec![CellCoord::new(0, 0), CellCoord::new(1, 1)]
    );
}

#[test]
fn formula_free_grid_is_empty_not_an_error() {
    let grid = grid_of(&[&["a", "1"], &["", "plain"]]);
    assert!(find_formula_cells(&grid, 3).is_empty());
}

#[test]
fn order_is_row_major_with_no_duplicates() {
    let grid = grid_of(&[
        &["=1", "x", "=2"],
        &["=3", "=4", "y"],
        &["z", "", "=5"],
    ]);
    let positions = find_formula_cells(&grid, 0);
    assert_eq!(
        positions,
        vec![
            CellCoord::new(0, 0),
            CellCoord::new(0, 2),
            CellCoord::new(1, 0),
            CellCoord::new(1, 1),
            CellCoord::new(2, 2),
        ]
    );

    let mut deduped = positions.clone();
    deduped.dedup();
    assert_eq!(deduped, positions);
}

#[test]
fn equals_must_be_the_first_character() {
    let grid = grid_of(&[&["a=b", " =1", "=ok"]]);
    assert_eq!(find_formula_cells(&grid, 3), vec![CellCoord::new(0, 2)]);
}
