use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque activation payload delivered by the platform shell. The host
/// never inspects it beyond presence; it is handed to lifecycle
/// observers as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartSignal {
    pub action: Option<String>,
    #[serde(default)]
    pub extras: HashMap<String, String>,
}

impl StartSignal {
    pub fn with_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            extras: HashMap::new(),
        }
    }
}

/// Keep-alive directive returned to the platform after a start signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDirective {
    /// Redeliver a start signal if the hosting process is reclaimed for
    /// resource reasons; the menu is rebuilt from scratch.
    Sticky,
    NotSticky,
}
