use serde::{Deserialize, Serialize};

/// Outcome of checking a bearer token against the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NotFound,
    Expired,
    Active,
}
