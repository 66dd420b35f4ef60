use serde::Deserialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Striker,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 4] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::Defender,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Striker,
    ];

    /// Menu codes start at 1, in declaration order.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PlayerPositionType::Goalkeeper),
            2 => Some(PlayerPositionType::Defender),
            3 => Some(PlayerPositionType::Midfielder),
            4 => Some(PlayerPositionType::Striker),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            PlayerPositionType::Goalkeeper => 1,
            PlayerPositionType::Defender => 2,
            PlayerPositionType::Midfielder => 3,
            PlayerPositionType::Striker => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "Goalkeeper",
            PlayerPositionType::Defender => "Defender",
            PlayerPositionType::Midfielder => "Midfielder",
            PlayerPositionType::Striker => "Striker",
        }
    }
}

// `pad` so that width and alignment flags apply
impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad(self.name())
    }
}
