// Lexicon lookup.
//
// The word database is an external collaborator; the engine only relies
// on the lookup contract below. The shipped backend is a SQLite store
// with four tables (exceptions, mastertable, Plurals, Variations); the
// in-memory backend serves tests and embedders without a database file.

use aruuz_core::character::strip_diacritics;
use hashbrown::HashMap;

/// Lookup failure. The engine treats any error as "lexicon unavailable"
/// and falls back to heuristics, recording the fact on the word.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon store error: {0}")]
    Store(#[from] rusqlite::Error),
}

/// Which table produced an entry. Exceptions short-circuit everything
/// else; variations extend master hits rather than replacing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Exception,
    Master,
    Plural,
    Variation,
}

/// One lexicon row for a word.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub id: i64,
    pub source: EntrySource,
    /// Ready-made weight code (exceptions rows only).
    pub code: Option<String>,
    /// Syllabified taqti text to be scanned chunk by chunk.
    pub taqti: Option<String>,
    /// Diacritic-annotated spelling.
    pub muarrab: String,
    /// Source-language tag (عربی، فارسی، ...).
    pub language: String,
    /// The entry admits multiple readings.
    pub is_varied: bool,
}

/// The lookup contract: zero or more entries for a bare (diacritic-free)
/// surface form. Order is meaningful and must be deterministic.
pub trait Lexicon {
    fn lookup(&self, surface: &str) -> Result<Vec<LexiconEntry>, LexiconError>;
}

// ---------------------------------------------------------------------------
// SQLite backend
// ---------------------------------------------------------------------------

/// SQLite-backed lexicon. One read-only connection per engine instance.
pub struct SqliteLexicon {
    conn: rusqlite::Connection,
}

impl SqliteLexicon {
    pub fn open(path: &str) -> Result<Self, LexiconError> {
        let conn = rusqlite::Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        )?;
        Ok(SqliteLexicon { conn })
    }

    /// An empty in-memory store with the four-table schema; used by
    /// tests.
    pub fn open_in_memory() -> Result<Self, LexiconError> {
        let conn = rusqlite::Connection::open_in_memory()?;
        conn.execute_batch(
            "CREATE TABLE exceptions (id INTEGER PRIMARY KEY, word TEXT, taqti TEXT,
                                      taqti2 TEXT, taqti3 TEXT);
             CREATE TABLE mastertable (id INTEGER PRIMARY KEY, word TEXT, muarrab TEXT,
                                       taqti TEXT, language TEXT, isVaried INTEGER,
                                       isPlural INTEGER);
             CREATE TABLE Plurals (id INTEGER PRIMARY KEY, word TEXT, muarrab TEXT,
                                   taqti TEXT, language TEXT);
             CREATE TABLE Variations (id INTEGER PRIMARY KEY, word TEXT, muarrab TEXT,
                                      taqti TEXT, language TEXT);",
        )?;
        Ok(SqliteLexicon { conn })
    }

    pub fn connection(&self) -> &rusqlite::Connection {
        &self.conn
    }

    fn lookup_exceptions(&self, word: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, taqti, taqti2, taqti3 FROM exceptions WHERE word LIKE ?1")?;
        let mut out = Vec::new();
        let rows = stmt.query_map([word], |row| {
            let id: i64 = row.get(0)?;
            let taqtis: [Option<String>; 3] = [row.get(1)?, row.get(2)?, row.get(3)?];
            Ok((id, taqtis))
        })?;
        for row in rows {
            let (id, taqtis) = row?;
            for taqti in taqtis.into_iter().flatten() {
                let code: String = taqti.split_whitespace().collect();
                if code.is_empty() {
                    continue;
                }
                out.push(LexiconEntry {
                    // Exception ids are negated to keep them apart from
                    // master ids.
                    id: -id,
                    source: EntrySource::Exception,
                    code: Some(code),
                    taqti: None,
                    muarrab: String::new(),
                    language: String::new(),
                    is_varied: false,
                });
            }
        }
        Ok(out)
    }

    fn lookup_table(
        &self,
        table: &str,
        source: EntrySource,
        word: &str,
    ) -> Result<Vec<LexiconEntry>, LexiconError> {
        let sql =
            format!("SELECT id, muarrab, taqti, language FROM {table} WHERE word LIKE ?1");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map([word], |row| {
            Ok(LexiconEntry {
                id: row.get(0)?,
                source,
                code: None,
                taqti: row.get::<_, Option<String>>(2)?.map(|t| t.trim().to_string()),
                muarrab: row
                    .get::<_, Option<String>>(1)?
                    .map(|m| m.trim().to_string())
                    .unwrap_or_default(),
                language: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                is_varied: false,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn lookup_master(&self, word: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        // Homograph rows are stored with a numeric suffix: word 1 .. 12.
        let mut clauses = vec!["word LIKE ?1".to_string()];
        for i in 2..=13 {
            clauses.push(format!("word LIKE ?{i}"));
        }
        let sql = format!(
            "SELECT id, muarrab, taqti, language, isVaried FROM mastertable WHERE {}",
            clauses.join(" OR ")
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let mut params: Vec<String> = vec![word.to_string()];
        for i in 1..=12 {
            params.push(format!("{word} {i}"));
        }
        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
            Ok(LexiconEntry {
                id: row.get(0)?,
                source: EntrySource::Master,
                code: None,
                taqti: row.get::<_, Option<String>>(2)?.map(|t| t.trim().to_string()),
                muarrab: row
                    .get::<_, Option<String>>(1)?
                    .map(|m| m.trim().to_string())
                    .unwrap_or_default(),
                language: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                is_varied: row.get::<_, Option<i64>>(4)?.unwrap_or(0) != 0,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn variations_by_id(&self, id: i64) -> Result<Vec<LexiconEntry>, LexiconError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, muarrab, taqti, language FROM Variations WHERE id = ?1",
        )?;
        let rows = stmt.query_map([id], |row| {
            Ok(LexiconEntry {
                id: row.get(0)?,
                source: EntrySource::Variation,
                code: None,
                taqti: row.get::<_, Option<String>>(2)?.map(|t| t.trim().to_string()),
                muarrab: row
                    .get::<_, Option<String>>(1)?
                    .map(|m| m.trim().to_string())
                    .unwrap_or_default(),
                language: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                is_varied: false,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

impl Lexicon for SqliteLexicon {
    /// Strategy chain: exceptions, then master (variations attached for
    /// varied hits), then plurals, then standalone variations. The first
    /// non-empty stage wins.
    fn lookup(&self, surface: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        let bare = strip_diacritics(surface);

        let hits = self.lookup_exceptions(&bare)?;
        if !hits.is_empty() {
            return Ok(hits);
        }

        let mut hits = self.lookup_master(&bare)?;
        if !hits.is_empty() {
            if hits[0].is_varied {
                let extra = self.variations_by_id(hits[0].id)?;
                hits.extend(extra);
            }
            return Ok(hits);
        }

        let hits = self.lookup_table("Plurals", EntrySource::Plural, &bare)?;
        if !hits.is_empty() {
            return Ok(hits);
        }

        self.lookup_table("Variations", EntrySource::Variation, &bare)
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// Map-backed lexicon for tests and embedders.
#[derive(Default)]
pub struct MemoryLexicon {
    entries: HashMap<String, Vec<LexiconEntry>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register ready-made codes for a word (exception-style rows).
    pub fn insert_codes(&mut self, word: &str, codes: &[&str]) {
        let list = self.entries.entry(word.to_string()).or_default();
        for (k, code) in codes.iter().enumerate() {
            list.push(LexiconEntry {
                id: -((list.len() + k + 1) as i64),
                source: EntrySource::Exception,
                code: Some((*code).to_string()),
                taqti: None,
                muarrab: String::new(),
                language: String::new(),
                is_varied: false,
            });
        }
    }

    /// Register a syllabified master row for a word.
    pub fn insert_taqti(&mut self, word: &str, taqti: &str, language: &str) {
        let list = self.entries.entry(word.to_string()).or_default();
        list.push(LexiconEntry {
            id: (list.len() + 1) as i64,
            source: EntrySource::Master,
            code: None,
            taqti: Some(taqti.to_string()),
            muarrab: word.to_string(),
            language: language.to_string(),
            is_varied: false,
        });
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, surface: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
        let bare = strip_diacritics(surface);
        Ok(self.entries.get(&bare).cloned().unwrap_or_default())
    }
}
