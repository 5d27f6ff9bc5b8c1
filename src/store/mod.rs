//! Chatline Store
//!
//! SQLite persistence for users, channels and messages.
//!
//! - **types**: Core data structures (Channel, Message, MessageQuery)
//! - **password**: Argon2 password hashing
//! - **error**: Error types
//!
//! The connection is opened once and shared behind a mutex; every operation
//! is a short statement, so handlers call straight into the store.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatline::store::{ChatStore, MessageQuery, NewMessage};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ChatStore::open("./chatline.db")?;
//!
//!     let user_id = store.create_user("alice", "s3cret")?;
//!     let general = store.create_channel("general")?;
//!     store.create_message(&NewMessage::new(general, user_id, "hello"))?;
//!
//!     for message in store.list_messages(MessageQuery::channel(general))? {
//!         println!("{}: {}", message.user_name, message.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod password;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use types::{Channel, Message, MessageQuery, NewMessage, DEFAULT_MESSAGE_LIMIT};

use rusqlite::{params, Connection, ErrorCode, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS channels (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY,
        channel_id INTEGER NOT NULL,
        user_id INTEGER NOT NULL,
        message TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX IF NOT EXISTS idx_messages_channel ON messages(channel_id, id);
";

/// SQLite-backed store for the chat backend
#[derive(Clone)]
pub struct ChatStore {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl ChatStore {
    /// Open (or create) a database file and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Self::init(conn, Some(path))
    }

    /// Open a private in-memory database
    pub fn in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(format!("Failed to acquire connection lock: {}", e)))
    }

    /// Cheap round trip used by readiness checks
    pub fn ping(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    // ============ Users ============

    /// Register a user, returning the new id
    pub fn create_user(&self, username: &str, password: &str) -> StoreResult<i64> {
        let hash = password::hash_password(password)?;
        let conn = self.lock()?;

        match conn.execute(
            "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
            params![username, hash],
        ) {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(StoreError::UsernameTaken(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check credentials, returning the user id on a match
    pub fn verify_login(&self, username: &str, password: &str) -> StoreResult<Option<i64>> {
        let row: Option<(i64, String)> = {
            let conn = self.lock()?;
            conn.query_row(
                "SELECT id, password_hash FROM users WHERE username = ?1",
                params![username],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?
        };

        match row {
            Some((id, hash)) => Ok(password::verify_password(password, &hash)?.then_some(id)),
            None => {
                // Unknown users pay the same Argon2 cost as known ones
                if let Some(hash) = password::dummy_hash() {
                    let _ = password::verify_password(password, hash);
                }
                Ok(None)
            }
        }
    }

    // ============ Channels ============

    /// Create a channel, returning the new id
    pub fn create_channel(&self, name: &str) -> StoreResult<i64> {
        let conn = self.lock()?;
        conn.execute("INSERT INTO channels (name) VALUES (?1)", params![name])?;
        Ok(conn.last_insert_rowid())
    }

    /// All channels in creation order
    pub fn list_channels(&self) -> StoreResult<Vec<Channel>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached("SELECT id, name FROM channels ORDER BY id")?;

        let channels = stmt
            .query_map([], |row| {
                Ok(Channel {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(channels)
    }

    // ============ Messages ============

    /// Store a message, returning the new id
    pub fn create_message(&self, message: &NewMessage) -> StoreResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO messages (channel_id, user_id, message) VALUES (?1, ?2, ?3)",
            params![message.channel_id, message.user_id, message.text],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Messages in a channel newer than the cursor, oldest first
    pub fn list_messages(&self, query: MessageQuery) -> StoreResult<Vec<Message>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT m.id, m.channel_id, m.user_id, u.username, m.message
             FROM messages m
             LEFT JOIN users u ON u.id = m.user_id
             WHERE m.channel_id = ?1 AND m.id > ?2
             ORDER BY m.id ASC
             LIMIT ?3",
        )?;

        let messages = stmt
            .query_map(
                params![query.channel_id, query.after_id, query.limit],
                |row| {
                    Ok(Message {
                        id: row.get(0)?,
                        channel_id: row.get(1)?,
                        user_id: row.get(2)?,
                        user_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                        text: row.get(4)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("chat.db");

        let store = ChatStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
        store.ping().unwrap();
    }

    #[test]
    fn test_channels_persist_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.db");

        {
            let store = ChatStore::open(&path).unwrap();
            store.create_channel("general").unwrap();
            store.create_channel("random").unwrap();
        }

        let store = ChatStore::open(&path).unwrap();
        let names: Vec<String> = store
            .list_channels()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["general", "random"]);
    }

    #[test]
    fn test_list_channels_empty() {
        let store = ChatStore::in_memory().unwrap();
        assert!(store.list_channels().unwrap().is_empty());
    }

    #[test]
    fn test_create_channel_assigns_increasing_ids() {
        let store = ChatStore::in_memory().unwrap();
        let a = store.create_channel("a").unwrap();
        let b = store.create_channel("b").unwrap();
        assert!(b > a);

        let channels = store.list_channels().unwrap();
        assert_eq!(channels[0], Channel { id: a, name: "a".to_string() });
        assert_eq!(channels[1], Channel { id: b, name: "b".to_string() });
    }

    #[test]
    fn test_user_login() {
        let store = ChatStore::in_memory().unwrap();
        let id = store.create_user("alice", "s3cret").unwrap();

        assert_eq!(store.verify_login("alice", "s3cret").unwrap(), Some(id));
        assert_eq!(store.verify_login("alice", "wrong").unwrap(), None);
        assert_eq!(store.verify_login("bob", "s3cret").unwrap(), None);
    }

    #[test]
    fn test_unknown_user_still_checks_a_hash() {
        let store = ChatStore::in_memory().unwrap();

        assert_eq!(store.verify_login("ghost", "pw").unwrap(), None);
        assert!(matches!(password::DUMMY_HASH.get(), Some(Some(_))));
    }

    #[test]
    fn test_duplicate_username() {
        let store = ChatStore::in_memory().unwrap();
        store.create_user("alice", "one").unwrap();

        let err = store.create_user("alice", "two").unwrap_err();
        assert!(matches!(err, StoreError::UsernameTaken(name) if name == "alice"));
    }

    #[test]
    fn test_messages_cursor_and_limit() {
        let store = ChatStore::in_memory().unwrap();
        let user = store.create_user("alice", "pw").unwrap();
        let general = store.create_channel("general").unwrap();
        let random = store.create_channel("random").unwrap();

        let first = store
            .create_message(&NewMessage::new(general, user, "one"))
            .unwrap();
        store
            .create_message(&NewMessage::new(random, user, "elsewhere"))
            .unwrap();
        store
            .create_message(&NewMessage::new(general, user, "two"))
            .unwrap();
        store
            .create_message(&NewMessage::new(general, user, "three"))
            .unwrap();

        let all = store.list_messages(MessageQuery::channel(general)).unwrap();
        let texts: Vec<&str> = all.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(all.iter().all(|m| m.user_name == "alice"));

        let newer = store
            .list_messages(MessageQuery::channel(general).after(first))
            .unwrap();
        assert_eq!(newer.len(), 2);
        assert_eq!(newer[0].text, "two");

        let limited = store
            .list_messages(MessageQuery::channel(general).limit(1))
            .unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].text, "one");
    }

    #[test]
    fn test_message_from_unknown_user_has_empty_name() {
        let store = ChatStore::in_memory().unwrap();
        let general = store.create_channel("general").unwrap();
        store
            .create_message(&NewMessage::new(general, 999, "ghost"))
            .unwrap();

        let messages = store.list_messages(MessageQuery::channel(general)).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].user_name, "");
        assert_eq!(messages[0].user_id, 999);
    }
}
