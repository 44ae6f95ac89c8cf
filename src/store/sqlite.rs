use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, info};

use crate::store::source::{Release, ReleaseSource};
use crate::version::error::StoreError;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(db_path: &Path) -> Result<Self, StoreError> {
        info!("Opening release database at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::with_connection(conn)
    }

    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = Self {
            conn: Mutex::new(conn),
        };

        store.create_schema()?;
        info!("Release database initialized");

        Ok(store)
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        debug!("Creating database schema");

        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS owners (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS releases (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id INTEGER NOT NULL,
                version TEXT NOT NULL,
                FOREIGN KEY (owner_id) REFERENCES owners(id) ON DELETE CASCADE,
                UNIQUE(owner_id, version)
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_releases_version ON releases(version)",
            [],
        )?;

        debug!("Database schema created successfully");
        Ok(())
    }

    fn query_strings(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<String>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(sql)?;
        let values = stmt
            .query_map(params, |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(values)
    }
}

impl ReleaseSource for SqliteStore {
    fn all_versions(&self) -> Result<Vec<String>, StoreError> {
        self.query_strings("SELECT version FROM releases ORDER BY id", [])
    }

    fn releases_with_prefix(&self, prefix: &str) -> Result<Vec<Release>, StoreError> {
        let conn = self.lock_conn()?;
        // substr keeps '%' and '_' in the prefix literal
        let mut stmt = conn.prepare(
            r#"
            SELECT o.name, r.version FROM releases r
            JOIN owners o ON r.owner_id = o.id
            WHERE substr(r.version, 1, length(?1)) = ?1
            ORDER BY r.id
            "#,
        )?;

        let releases = stmt
            .query_map([prefix], |row| {
                Ok(Release {
                    owner: row.get(0)?,
                    version: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(releases)
    }

    fn owners(&self) -> Result<Vec<String>, StoreError> {
        self.query_strings("SELECT name FROM owners ORDER BY id", [])
    }

    fn owner_exists(&self, owner: &str) -> Result<bool, StoreError> {
        let conn = self.lock_conn()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM owners WHERE name = ?1)",
            [owner],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    fn versions_for_owner(&self, owner: &str) -> Result<Vec<String>, StoreError> {
        self.query_strings(
            r#"
            SELECT r.version FROM releases r
            JOIN owners o ON r.owner_id = o.id
            WHERE o.name = ?1
            ORDER BY r.id
            "#,
            [owner],
        )
    }

    fn add_releases(&self, owner: &str, versions: Vec<String>) -> Result<(), StoreError> {
        debug!("Saving {} releases for {}", versions.len(), owner);

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        tx.execute("INSERT OR IGNORE INTO owners (name) VALUES (?1)", [owner])?;

        let owner_id: i64 =
            tx.query_row("SELECT id FROM owners WHERE name = ?1", [owner], |row| {
                row.get(0)
            })?;

        // Insert only new versions (skip existing ones)
        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO releases (owner_id, version) VALUES (?1, ?2)")?;
            for version in &versions {
                stmt.execute((owner_id, version))?;
            }
        }

        tx.commit()?;

        debug!("Successfully saved releases for {}", owner);
        Ok(())
    }
}
