use super::player::Player;

/// Which set of glyphs to draw cells with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Emoji,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Glyph from the default (emoji) set.
    pub fn display_glyph(self) -> &'static str {
        self.glyph(GlyphSet::Emoji)
    }

    pub fn glyph(self, glyphs: GlyphSet) -> &'static str {
        match (glyphs, self) {
            (GlyphSet::Emoji, Cell::Empty) => "  ",
            (GlyphSet::Emoji, Cell::Red) => "🔴",
            (GlyphSet::Emoji, Cell::Yellow) => "🟡",
            (GlyphSet::Ascii, Cell::Empty) => ".",
            (GlyphSet::Ascii, Cell::Red) => "R",
            (GlyphSet::Ascii, Cell::Yellow) => "Y",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}
