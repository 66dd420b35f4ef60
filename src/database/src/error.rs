use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum DatabaseError {
    Json(serde_json::Error),
    InvalidPlayer { index: usize, reason: String },
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseError::Json(err) => write!(f, "JSON error: {}", err),
            DatabaseError::InvalidPlayer { index, reason } => {
                write!(f, "invalid player #{}: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Json(err) => Some(err),
            DatabaseError::InvalidPlayer { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::Json(err)
    }
}
