use serde::{Deserialize, Serialize};

/// An integration shown on the apps page. No timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub connected: bool,
}
