/// Horizontal placement of glyph columns

/// Hand-tuned column positions for glyphs the linear rule spaces badly
const OVERRIDES: &[(char, [f32; 5])] = &[
    ('N', [-0.5, 0.0, 0.25, 0.5, 1.0]),
    ('X', [-1.0, -0.75, -0.25, 0.25, 0.5]),
];

/// Centering constant subtracted from the linear column position
pub fn center_constant(symbol: char) -> f32 {
    match symbol {
        'T' => 1.0,
        'E' => 0.5,
        'X' | 'N' => 1.0,
        _ => 0.75,
    }
}

/// Explicit override for a (symbol, column) pair, if one exists
pub fn override_for(symbol: char, column: usize) -> Option<f32> {
    OVERRIDES
        .iter()
        .find(|(s, _)| *s == symbol)
        .and_then(|(_, columns)| columns.get(column).copied())
}

/// Local x position of a block in `column` of `symbol`'s grid
pub fn x_offset(symbol: char, column: usize) -> f32 {
    override_for(symbol, column)
        .unwrap_or_else(|| column as f32 * 0.5 - center_constant(symbol))
}
