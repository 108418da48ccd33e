//! Binder configuration types

use crate::binder::ConflictPolicy;
use serde::{Deserialize, Serialize};

/// Binder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinderConfig {
    /// Handling of fields that carry both an injection and an infection key
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}
