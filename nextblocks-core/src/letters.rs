/// Block glyph table for the logo alphabet

/// A rectangular 0/1 grid, rows top-to-bottom and columns left-to-right
pub type LetterGrid = &'static [&'static [u8]];

const N: LetterGrid = &[
    &[1, 0, 0, 0, 1],
    &[1, 1, 0, 0, 1],
    &[1, 0, 1, 0, 1],
    &[1, 0, 0, 1, 1],
    &[1, 0, 0, 0, 1],
];

const E: LetterGrid = &[
    &[1, 1, 1],
    &[1, 0, 0],
    &[1, 1, 0],
    &[1, 0, 0],
    &[1, 1, 1],
];

const X: LetterGrid = &[
    &[1, 0, 0, 0, 1],
    &[0, 1, 0, 1, 0],
    &[0, 0, 1, 0, 0],
    &[0, 1, 0, 1, 0],
    &[1, 0, 0, 0, 1],
];

const T: LetterGrid = &[
    &[1, 1, 1],
    &[0, 1, 0],
    &[0, 1, 0],
    &[0, 1, 0],
    &[0, 1, 0],
];

/// Symbols with a dedicated glyph
pub const ALPHABET: &[char] = &['N', 'E', 'X', 'T'];

/// Look up the grid for a symbol. Unknown symbols render as N.
pub fn shape_of(symbol: char) -> LetterGrid {
    match symbol {
        'N' => N,
        'E' => E,
        'X' => X,
        'T' => T,
        _ => {
            log::warn!("no glyph for {:?}, falling back to N", symbol);
            N
        }
    }
}

/// Iterate the (row, column) pairs of filled cells in reading order
pub fn filled_cells(grid: LetterGrid) -> impl Iterator<Item = (usize, usize)> {
    grid.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(move |(column, _)| (row, column))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grids_are_rectangular() {
        for &symbol in ALPHABET {
            let grid = shape_of(symbol);
            assert_eq!(grid.len(), 5, "{symbol} should be 5 rows tall");
            let width = grid[0].len();
            assert!(grid.iter().all(|row| row.len() == width));
        }
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(shape_of('N')[0].len(), 5);
        assert_eq!(shape_of('E')[0].len(), 3);
        assert_eq!(shape_of('X')[0].len(), 5);
        assert_eq!(shape_of('T')[0].len(), 3);
    }

    #[test]
    fn test_exact_patterns() {
        let n: LetterGrid = &[
            &[1, 0, 0, 0, 1],
            &[1, 1, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 1, 1],
            &[1, 0, 0, 0, 1],
        ];
        let e: LetterGrid = &[&[1, 1, 1], &[1, 0, 0], &[1, 1, 0], &[1, 0, 0], &[1, 1, 1]];
        let x: LetterGrid = &[
            &[1, 0, 0, 0, 1],
            &[0, 1, 0, 1, 0],
            &[0, 0, 1, 0, 0],
            &[0, 1, 0, 1, 0],
            &[1, 0, 0, 0, 1],
        ];
        let t: LetterGrid = &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0], &[0, 1, 0], &[0, 1, 0]];

        assert_eq!(shape_of('N'), n);
        assert_eq!(shape_of('E'), e);
        assert_eq!(shape_of('X'), x);
        assert_eq!(shape_of('T'), t);
    }

    #[test]
    fn test_unknown_symbol_falls_back_to_n() {
        assert_eq!(shape_of('Q'), shape_of('N'));
        assert_eq!(shape_of('n'), shape_of('N'));
    }

    #[test]
    fn test_filled_cells() {
        let cells: Vec<_> = filled_cells(shape_of('T')).collect();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[3], (1, 1));
        assert_eq!(filled_cells(shape_of('N')).count(), 13);
        assert_eq!(filled_cells(shape_of('X')).count(), 9);
        assert_eq!(filled_cells(shape_of('E')).count(), 10);
    }
}
