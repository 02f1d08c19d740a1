use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::cell::Cell;
use crate::error::ParsePlayerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }

    /// Pick who moves first, uniformly at random.
    pub fn pick_first<R: Rng + ?Sized>(rng: &mut R) -> Player {
        if rng.random_bool(0.5) {
            Player::Red
        } else {
            Player::Yellow
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Player::Red),
            "yellow" => Ok(Player::Yellow),
            _ => Err(ParsePlayerError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Yellow.to_string(), "Yellow");
    }

    #[test]
    fn test_player_cell_is_never_empty() {
        assert_eq!(Player::Red.to_cell(), Cell::Red);
        assert_eq!(Player::Yellow.to_cell(), Cell::Yellow);
    }

    #[test]
    fn test_parse_player() {
        assert_eq!("red".parse::<Player>().unwrap(), Player::Red);
        assert_eq!(" Yellow ".parse::<Player>().unwrap(), Player::Yellow);
        assert!("green".parse::<Player>().is_err());
    }

    #[test]
    fn test_pick_first_is_seeded() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(Player::pick_first(&mut a), Player::pick_first(&mut b));
        }
    }

    #[test]
    fn test_pick_first_picks_both() {
        let mut rng = StdRng::seed_from_u64(1);
        let picks: Vec<Player> = (0..200).map(|_| Player::pick_first(&mut rng)).collect();
        assert!(picks.contains(&Player::Red));
        assert!(picks.contains(&Player::Yellow));
    }
}
