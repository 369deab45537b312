pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use models::{BlogRow, UserRow};

/// Capability surface the HTTP layer depends on. Implemented by the
/// SQLite-backed [`Database`]; any backend exposing these per-entity
/// find/insert/update/delete operations can stand in.
pub trait Store: Send + Sync {
    // -- Users --
    fn create_user(
        &self,
        id: &str,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<()>;
    fn find_user_by_username(&self, username: &str) -> Result<Option<UserRow>>;
    fn find_user_by_id(&self, id: &str) -> Result<Option<UserRow>>;
    fn list_users(&self) -> Result<Vec<UserRow>>;

    // -- Blogs --
    fn insert_blog(
        &self,
        id: &str,
        title: &str,
        author: Option<&str>,
        url: &str,
        likes: u64,
        owner_id: Option<&str>,
    ) -> Result<()>;
    fn list_blogs(&self) -> Result<Vec<BlogRow>>;
    fn find_blog(&self, id: &str) -> Result<Option<BlogRow>>;
    /// Returns false when no row matched the id.
    fn update_blog_likes(&self, id: &str, likes: u64) -> Result<bool>;
    /// Returns false when no row matched the id.
    fn delete_blog(&self, id: &str) -> Result<bool>;
}

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        migrations::run(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Private throwaway database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        migrations::run(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("DB lock poisoned: {}", e))?;
        f(&conn)
    }

    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("DB lock poisoned: {}", e))?;
        f(&mut conn)
    }
}
