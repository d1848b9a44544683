//! Location Model

use serde::{Deserialize, Serialize};

/// Gym location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
}
