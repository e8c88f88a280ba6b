use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat message posted to the shared board.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    pub id: String,
    pub body: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(body: &str, author: &str) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            body: body.to_string(),
            author: author.to_string(),
            timestamp: Utc::now(),
        }
    }
}
