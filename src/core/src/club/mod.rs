pub mod person;
pub mod player;
pub mod roster;

pub use person::*;

pub use player::{
    Player, PlayerBuilder, PlayerOrdering, PlayerPositionType, PlayerSkills,
};

pub use roster::Roster;
