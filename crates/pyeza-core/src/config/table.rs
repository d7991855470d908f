//! Table rendering defaults.

use serde::{Deserialize, Serialize};

/// Defaults applied when building table view models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefaults {
    /// Chips shown in a chips cell before collapsing the rest into "+N".
    #[serde(default = "default_max_visible_chips")]
    pub max_visible_chips: usize,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            max_visible_chips: default_max_visible_chips(),
        }
    }
}

fn default_max_visible_chips() -> usize {
    3
}
