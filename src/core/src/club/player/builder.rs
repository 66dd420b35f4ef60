use crate::club::{Player, PlayerPositionType, PlayerSkills};
use crate::shared::CurrencyValue;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    nationality: Option<String>,
    age: Option<u32>,
    position: Option<PlayerPositionType>,
    market_value: Option<CurrencyValue>,
    club: Option<String>,
    skills: Option<PlayerSkills>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn market_value(mut self, market_value: CurrencyValue) -> Self {
        self.market_value = Some(market_value);
        self
    }

    pub fn club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player::new(
            self.name.ok_or("name is required")?,
            self.nationality.unwrap_or_default(),
            self.age.unwrap_or_default(),
            self.position.ok_or("position is required")?,
            self.market_value.ok_or("market_value is required")?,
            self.club.unwrap_or_default(),
            self.skills.ok_or("skills is required")?,
        ))
    }
}
