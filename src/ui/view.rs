use crate::config::DisplayConfig;
use crate::error::ColumnFullError;
use crate::game::{Board, GlyphSet, Player};

pub const BOARD_HEADER: &str = "Current board is: ";
pub const TIE_LINE: &str = "It's a tie";

pub fn player_glyph(player: Player, glyphs: GlyphSet) -> &'static str {
    player.to_cell().glyph(glyphs)
}

pub fn turn_header(player: Player, glyphs: GlyphSet) -> String {
    format!("{}'s turn", player_glyph(player, glyphs))
}

pub fn winner_line(player: Player, glyphs: GlyphSet) -> String {
    format!("Winner is: {}", player_glyph(player, glyphs))
}

pub fn column_full_line(err: &ColumnFullError, glyphs: GlyphSet) -> String {
    format!(
        "Column {} is fully busy, can not put {} there!",
        err.column + 1,
        player_glyph(err.player, glyphs)
    )
}

pub fn board_lines(board: &Board, display: &DisplayConfig) -> Vec<String> {
    board.render_with(display.glyphs, &display.separator)
}
