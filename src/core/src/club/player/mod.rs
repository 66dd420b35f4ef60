pub mod builder;
pub mod ordering;
pub mod player;
pub mod positions;
pub mod skills;

pub use builder::*;
pub use ordering::*;
pub use player::*;
pub use positions::*;
pub use skills::*;
