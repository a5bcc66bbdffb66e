use serde::{Deserialize, Serialize};

/// Where an aggregate's data comes from.
///
/// The admin UI runs against either seeded in-memory data or a thin REST
/// client; every aggregate declares which source currently backs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Seeded in-memory dataset standing in for the real backend
    Mock,
    /// Thin REST client against a deployed backend
    Remote,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Mock => "mock",
            Origin::Remote => "remote",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
