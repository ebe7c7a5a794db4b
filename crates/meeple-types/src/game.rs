use serde::{Deserialize, Serialize};

/// A single hit from the remote game database search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: u64,
    pub name: String,
    /// Publication year as reported by the service. Missing for some
    /// unreleased or very old records.
    pub year: Option<String>,
}

impl GameSummary {
    /// Display label used by pickers and search output.
    pub fn label(&self) -> String {
        match &self.year {
            Some(year) => format!("{} ({}) - ID: {}", self.name, year, self.id),
            None => format!("{} - ID: {}", self.name, self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_and_without_year() {
        let game = GameSummary {
            id: 13,
            name: "Catan".to_string(),
            year: Some("1995".to_string()),
        };
        assert_eq!(game.label(), "Catan (1995) - ID: 13");

        let unreleased = GameSummary {
            id: 99,
            name: "Prototype".to_string(),
            year: None,
        };
        assert_eq!(unreleased.label(), "Prototype - ID: 99");
    }
}
