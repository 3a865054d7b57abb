use serde::{Deserialize, Serialize};

/// Daily presence marker assigned by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusCode {
    #[default]
    Absent,
    Present,
    Late,
}

impl StatusCode {
    pub fn sc_from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ABSENT" => Some(Self::Absent),
            "PRESENT" => Some(Self::Present),
            "LATE" => Some(Self::Late),
            _ => None,
        }
    }

    pub fn sc_as_str(&self) -> &'static str {
        match self {
            StatusCode::Absent => "ABSENT",
            StatusCode::Present => "PRESENT",
            StatusCode::Late => "LATE",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, StatusCode::Present | StatusCode::Late)
    }
}
