use std::fmt::{Display, Formatter, Result};

/// Who the person is, independent of any football data.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerIdentity {
    pub name: String,
    pub nationality: String,
    pub age: u32,
}

impl PlayerIdentity {
    pub fn new(name: String, nationality: String, age: u32) -> Self {
        PlayerIdentity {
            name,
            nationality,
            age,
        }
    }
}

impl Display for PlayerIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.nationality, self.age)
    }
}
