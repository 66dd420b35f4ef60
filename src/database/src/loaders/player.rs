use scout_core::PlayerPositionType;
use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../../data/players.json");

#[derive(Debug, Deserialize)]
pub struct PlayerEntity {
    pub name: String,
    #[serde(default)]
    pub nationality: String,
    pub age: u32,
    pub position: PlayerPositionType,
    pub market_value: f64,
    #[serde(default)]
    pub club: String,
    pub skills: PlayerSkillsEntity,
}

#[derive(Debug, Deserialize)]
pub struct PlayerSkillsEntity {
    pub speed: u32,
    pub stamina: u32,
    pub technique: u32,
    pub shot_power: u32,
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Result<Vec<PlayerEntity>, serde_json::Error> {
        Self::parse(STATIC_PLAYERS_JSON)
    }

    pub fn parse(json: &str) -> Result<Vec<PlayerEntity>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
