use serde::{Deserialize, Serialize};

/// Expiration status of a single compliance date relative to "now".
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusTier {
    /// The date is in the past.
    Expired,
    /// Today or within the next 30 days.
    ExpiringSoon,
    /// More than 30 days away.
    Current,
    /// No date was recorded.
    NotProvided,
}

impl StatusTier {
    pub fn label(self) -> &'static str {
        match self {
            StatusTier::Expired => "Vencido",
            StatusTier::ExpiringSoon => "Próximo ao vencimento",
            StatusTier::Current => "Em dia",
            StatusTier::NotProvided => "Não informado",
        }
    }

    /// Ranking used to pick the most urgent tier of a row; lower is worse.
    pub fn urgency(self) -> u8 {
        match self {
            StatusTier::Expired => 0,
            StatusTier::ExpiringSoon => 1,
            StatusTier::NotProvided => 2,
            StatusTier::Current => 3,
        }
    }
}
