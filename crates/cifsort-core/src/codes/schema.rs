use serde::{Deserialize, Serialize};

/// On-disk form of a recognized code list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Codes in folder-creation order.
    pub codes: Vec<String>,
}
