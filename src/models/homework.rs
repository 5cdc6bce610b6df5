//! Homework review status and verdict mapping.

/// Review status of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parse a status code from the API, if it is a documented one.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed verdict sentence shown to the user for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
