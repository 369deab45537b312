use crate::models::{BlogRow, UserRow};
use crate::{Database, Store};
use anyhow::Result;
use rusqlite::Connection;

impl Store for Database {
    // -- Users --

    fn create_user(
        &self,
        id: &str,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (id, username, name, password) VALUES (?1, ?2, ?3, ?4)",
                (id, username, name, password_hash),
            )?;
            Ok(())
        })
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_username(conn, username))
    }

    fn find_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_id(conn, id))
    }

    fn list_users(&self) -> Result<Vec<UserRow>> {
        self.with_conn(query_users)
    }

    // -- Blogs --

    fn insert_blog(
        &self,
        id: &str,
        title: &str,
        author: Option<&str>,
        url: &str,
        likes: u64,
        owner_id: Option<&str>,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO blogs (id, title, author, url, likes, owner_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![id, title, author, url, likes, owner_id],
            )?;
            Ok(())
        })
    }

    fn list_blogs(&self) -> Result<Vec<BlogRow>> {
        self.with_conn(query_blogs)
    }

    fn find_blog(&self, id: &str) -> Result<Option<BlogRow>> {
        self.with_conn(|conn| query_blog_by_id(conn, id))
    }

    fn update_blog_likes(&self, id: &str, likes: u64) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                "UPDATE blogs SET likes = ?1 WHERE id = ?2",
                rusqlite::params![likes, id],
            )?;
            Ok(changed > 0)
        })
    }

    fn delete_blog(&self, id: &str) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let changed = conn.execute("DELETE FROM blogs WHERE id = ?1", [id])?;
            Ok(changed > 0)
        })
    }
}

fn query_user_by_username(conn: &Connection, username: &str) -> Result<Option<UserRow>> {
    let mut stmt = conn
        .prepare("SELECT id, username, name, password, created_at FROM users WHERE username = ?1")?;

    let row = stmt
        .query_row([username], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                name: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_user_by_id(conn: &Connection, id: &str) -> Result<Option<UserRow>> {
    let mut stmt =
        conn.prepare("SELECT id, username, name, password, created_at FROM users WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                name: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_users(conn: &Connection) -> Result<Vec<UserRow>> {
    let mut stmt = conn
        .prepare("SELECT id, username, name, password, created_at FROM users ORDER BY rowid")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                name: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_blogs(conn: &Connection) -> Result<Vec<BlogRow>> {
    // JOIN users to fetch owner_username in a single query (eliminates N+1).
    // rowid keeps the listing in stable insertion order.
    let mut stmt = conn.prepare(
        "SELECT b.id, b.title, b.author, b.url, b.likes, b.owner_id, u.username, b.created_at
         FROM blogs b
         LEFT JOIN users u ON b.owner_id = u.id
         ORDER BY b.rowid",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(BlogRow {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                url: row.get(3)?,
                likes: row.get(4)?,
                owner_id: row.get(5)?,
                owner_username: row.get(6)?,
                created_at: row.get(7)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_blog_by_id(conn: &Connection, id: &str) -> Result<Option<BlogRow>> {
    let mut stmt = conn.prepare(
        "SELECT b.id, b.title, b.author, b.url, b.likes, b.owner_id, u.username, b.created_at
         FROM blogs b
         LEFT JOIN users u ON b.owner_id = u.id
         WHERE b.id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(BlogRow {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                url: row.get(3)?,
                likes: row.get(4)?,
                owner_id: row.get(5)?,
                owner_username: row.get(6)?,
                created_at: row.get(7)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
