use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A stored blog post. `likes` is always present — requests that omit it
/// get 0 at the API boundary, and the schema backs that with a NOT NULL
/// DEFAULT 0 column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    /// Weak reference to the creating user; authorizes deletion, does not
    /// control the post's lifetime.
    pub owner: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
