/// Database row types — these map directly to SQLite rows.
/// Distinct from quill-types API models to keep the DB layer independent.

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub name: String,
    pub password: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct BlogRow {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub owner_id: Option<String>,
    /// Resolved from the users table on read; not a stored column.
    pub owner_username: Option<String>,
    pub created_at: String,
}
