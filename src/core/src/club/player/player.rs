use crate::club::player::builder::PlayerBuilder;
use crate::club::{PlayerIdentity, PlayerPositionType, PlayerSkills};
use crate::shared::CurrencyValue;
use std::fmt::{Display, Formatter, Result};

const NAME_COLUMN_WIDTH: usize = 15;
const POSITION_COLUMN_WIDTH: usize = 10;

#[derive(Debug)]
pub struct Player {
    //person data
    identity: PlayerIdentity,

    //player data
    position: PlayerPositionType,
    market_value: CurrencyValue,
    club: String,
    skills: PlayerSkills,
}

impl Player {
    pub fn new(
        name: String,
        nationality: String,
        age: u32,
        position: PlayerPositionType,
        market_value: CurrencyValue,
        club: String,
        skills: PlayerSkills,
    ) -> Self {
        Player {
            identity: PlayerIdentity::new(name, nationality, age),
            position,
            market_value,
            club,
            skills,
        }
    }

    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    #[inline]
    pub fn nationality(&self) -> &str {
        &self.identity.nationality
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.identity.age
    }

    pub fn position(&self) -> PlayerPositionType {
        self.position
    }

    pub fn market_value(&self) -> CurrencyValue {
        self.market_value
    }

    pub fn club(&self) -> &str {
        &self.club
    }

    pub fn skills(&self) -> &PlayerSkills {
        &self.skills
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.skills.score()
    }
}

// `{:.1}` rounds ties to even, the displayed rating rounds them away from zero
fn display_rating(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:<name_width$} | {:<position_width$} | Rating: {:.1} | {}",
            self.name(),
            self.position,
            display_rating(self.score()),
            self.market_value,
            name_width = NAME_COLUMN_WIDTH,
            position_width = POSITION_COLUMN_WIDTH,
        )
    }
}
