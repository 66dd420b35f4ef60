use crate::club::Player;
use std::cmp::Ordering;

/// Comparison rules a roster can be reordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayerOrdering {
    ByValue { ascending: bool },
    /// Highest score first.
    ByScore,
    /// Ordinal, ascending.
    ByName,
}

impl PlayerOrdering {
    pub fn by_value(ascending: bool) -> Self {
        PlayerOrdering::ByValue { ascending }
    }

    pub fn by_score() -> Self {
        PlayerOrdering::ByScore
    }

    pub fn by_name() -> Self {
        PlayerOrdering::ByName
    }

    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match *self {
            PlayerOrdering::ByValue { ascending: true } => Self::compare_value(a, b),
            PlayerOrdering::ByValue { ascending: false } => Self::compare_value(b, a),
            PlayerOrdering::ByScore => Self::compare_score(b, a),
            PlayerOrdering::ByName => Self::compare_name(a, b),
        }
    }

    fn compare_value(a: &Player, b: &Player) -> Ordering {
        a.market_value().compare_amount(&b.market_value())
    }

    fn compare_score(a: &Player, b: &Player) -> Ordering {
        a.score().total_cmp(&b.score())
    }

    fn compare_name(a: &Player, b: &Player) -> Ordering {
        a.name().cmp(b.name())
    }
}
