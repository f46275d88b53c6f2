//! Word-lookup store: a persistent map from token to an opaque record.
//!
//! Records are composed from the dictionary's placeholder metadata as
//! `value_tag1_tag2_tag3`. The reader never parses them back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::layout::{WordDictionary, WordEntry};

/// Table holding one row per known word.
pub const WORDS_TABLE: &str = "words";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("word table `{0}` does not exist; the store was never initialised")]
    MissingTable(&'static str),
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Joins an entry's value and tags with underscores.
pub fn compose_record(entry: &WordEntry) -> Vec<u8> {
    let mut parts = Vec::with_capacity(4);
    parts.push(entry.value.as_str());
    parts.extend(entry.tags.iter().map(String::as_str));
    parts.join("_").into_bytes()
}

pub trait WordStore {
    /// Adds every dictionary word that is not stored yet. Existing records
    /// are never overwritten. Returns how many words were added.
    fn init(&mut self, dictionary: &WordDictionary) -> Result<usize>;

    /// The raw record stored for `word`.
    fn lookup(&self, word: &str) -> Result<Option<Vec<u8>>>;

    /// Adds `word` with an empty record when absent. Returns whether it was
    /// added.
    fn insert(&mut self, word: &str) -> Result<bool>;
}

/// SQLite-backed store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens or creates the database at `path`, creating parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened word store");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    fn create_table(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS words (
                word TEXT PRIMARY KEY,
                record BLOB NOT NULL
            );",
        )?;
        Ok(())
    }

    fn has_table(&self) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![WORDS_TABLE],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

impl WordStore for SqliteStore {
    fn init(&mut self, dictionary: &WordDictionary) -> Result<usize> {
        self.create_table()?;
        let tx = self.conn.transaction()?;
        let mut added = 0;
        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO words (word, record) VALUES (?1, ?2)")?;
            for (word, entry) in dictionary {
                added += stmt.execute(params![word, compose_record(entry)])?;
            }
        }
        tx.commit()?;
        tracing::info!(words = dictionary.len(), added, "initialised word store");
        Ok(added)
    }

    fn lookup(&self, word: &str) -> Result<Option<Vec<u8>>> {
        if !self.has_table()? {
            return Err(StoreError::MissingTable(WORDS_TABLE));
        }
        let record = self
            .conn
            .query_row(
                "SELECT record FROM words WHERE word = ?1",
                params![word],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(record)
    }

    fn insert(&mut self, word: &str) -> Result<bool> {
        self.create_table()?;
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO words (word, record) VALUES (?1, ?2)",
            params![word, Vec::<u8>::new()],
        )?;
        Ok(changed > 0)
    }
}

/// Volatile store with the same semantics, used when no database is wanted
/// or the database cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: Option<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStore for MemoryStore {
    fn init(&mut self, dictionary: &WordDictionary) -> Result<usize> {
        let words = self.words.get_or_insert_with(BTreeMap::new);
        let mut added = 0;
        for (word, entry) in dictionary {
            if !words.contains_key(word) {
                words.insert(word.clone(), compose_record(entry));
                added += 1;
            }
        }
        Ok(added)
    }

    fn lookup(&self, word: &str) -> Result<Option<Vec<u8>>> {
        let words = self
            .words
            .as_ref()
            .ok_or(StoreError::MissingTable(WORDS_TABLE))?;
        Ok(words.get(word).cloned())
    }

    fn insert(&mut self, word: &str) -> Result<bool> {
        let words = self.words.get_or_insert_with(BTreeMap::new);
        if words.contains_key(word) {
            return Ok(false);
        }
        words.insert(word.to_string(), Vec::new());
        Ok(true)
    }
}
