pub mod club;
pub mod shared;
pub mod utils;

pub use club::{
    // Person exports
    PlayerIdentity,
    // Player exports
    Player, PlayerBuilder, PlayerOrdering, PlayerPositionType, PlayerSkills,
    // Roster exports
    Roster,
};

pub use shared::*;
pub use utils::*;
