use serde::{Deserialize, Serialize};

/// A course author. Read-only reference data for the catalog frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u32,
    pub name: String,
}

impl Author {
    /// Name shown in author pickers and course listings.
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }
}
