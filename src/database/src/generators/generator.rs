use crate::{DatabaseEntity, DatabaseError, PlayerEntity};
use log::debug;
use scout_core::{CurrencyValue, Player, PlayerSkills, Roster};
use std::rc::Rc;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> Result<Roster, DatabaseError> {
        let mut catalog = Roster::new();

        for (index, entity) in data.players.iter().enumerate() {
            let player = DatabaseGenerator::generate_player(entity)
                .map_err(|reason| DatabaseError::InvalidPlayer { index, reason })?;

            debug!("seed player: {}", player.identity());

            catalog.add(Rc::new(player));
        }

        Ok(catalog)
    }

    fn generate_player(entity: &PlayerEntity) -> Result<Player, String> {
        if entity.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }

        let skills = &entity.skills;

        Player::builder()
            .name(entity.name.clone())
            .nationality(entity.nationality.clone())
            .age(entity.age)
            .position(entity.position)
            .market_value(CurrencyValue::eur(entity.market_value))
            .club(entity.club.clone())
            .skills(PlayerSkills::new(
                skills.speed,
                skills.stamina,
                skills.technique,
                skills.shot_power,
            ))
            .build()
    }
}
