//! Navigation menu configuration.

use serde::{Deserialize, Serialize};

/// Navigation menu settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Optional JSON file replacing the built-in menu definition.
    #[serde(default)]
    pub definition_path: Option<String>,
}
