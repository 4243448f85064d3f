use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Label used when no name has been set
    pub fn default_name(self) -> &'static str {
        match self {
            Player::One => "Player One",
            Player::Two => "Player Two",
        }
    }

    /// Board symbol of this player's discs
    pub fn symbol(self) -> char {
        self.to_cell().symbol()
    }
}

/// Display names for both player slots. Names are presentation only and
/// never influence game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    one: String,
    two: String,
}

impl PlayerNames {
    pub fn new() -> Self {
        PlayerNames {
            one: Player::One.default_name().to_string(),
            two: Player::Two.default_name().to_string(),
        }
    }

    pub fn get(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }

    /// Set a player's name. Blank input restores the default label.
    pub fn set(&mut self, player: Player, name: &str) {
        let name = name.trim();
        let name = if name.is_empty() {
            player.default_name().to_string()
        } else {
            name.to_string()
        };
        match player {
            Player::One => self.one = name,
            Player::Two => self.two = name,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_cells() {
        assert_eq!(Player::One.to_cell(), Cell::PlayerOne);
        assert_eq!(Player::Two.to_cell(), Cell::PlayerTwo);
        assert_eq!(Player::One.symbol(), 'X');
        assert_eq!(Player::Two.symbol(), 'O');
    }

    #[test]
    fn test_default_names() {
        let names = PlayerNames::new();
        assert_eq!(names.get(Player::One), "Player One");
        assert_eq!(names.get(Player::Two), "Player Two");
    }

    #[test]
    fn test_set_name_trims() {
        let mut names = PlayerNames::new();
        names.set(Player::Two, "  Ada ");
        assert_eq!(names.get(Player::Two), "Ada");
        assert_eq!(names.get(Player::One), "Player One");
    }

    #[test]
    fn test_blank_name_restores_default() {
        let mut names = PlayerNames::new();
        names.set(Player::One, "Grace");
        names.set(Player::One, "   ");
        assert_eq!(names.get(Player::One), "Player One");

        names.set(Player::Two, "");
        assert_eq!(names.get(Player::Two), "Player Two");
    }
}
