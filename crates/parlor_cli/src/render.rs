//! Plain-text board drawing.

use parlor_core::{Position, Square};

/// Draws the board from white's side. `selected` is bracketed and every
/// square in `targets` shows `*` (or `x` over a capturable piece).
pub fn board(pos: &Position, selected: Option<Square>, targets: &[Square]) -> String {
    let mut out = String::with_capacity(256);
    for row in 0..8u8 {
        out.push_str(&format!("{} ", 8 - row));
        for col in 0..8u8 {
            let sq = Square::new(row, col);
            let glyph = match (pos.piece_at(sq), targets.contains(&sq)) {
                (Some(_), true) => 'x',
                (None, true) => '*',
                (Some(pc), false) => pc.symbol(),
                (None, false) => '·',
            };
            if selected == Some(sq) {
                out.push_str(&format!("[{glyph}]"));
            } else {
                out.push_str(&format!(" {glyph} "));
            }
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}
