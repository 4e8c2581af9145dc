use crate::base::Amount;
use crate::base::Day;
use crate::base::Expense;
use crate::base::amount::ParseAmountError;

/// SQLite-backed expense store. One table, parameterized statements, no
/// retry logic; concurrency between processes is whatever SQLite's own file
/// locking provides.
pub struct Store {
    conn: rusqlite::Connection,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database schema mismatch, clear the store with 'outlay clear'")]
    SchemaMismatch,
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Result of a full-table scan. Rows that fail to decode are collected
/// instead of aborting the scan.
pub struct Scan {
    pub expenses: Vec<Expense>,
    pub skipped: Vec<rusqlite::Error>,
}

impl Store {
    pub fn open<P>(path: P) -> Result<Self, StoreError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::init(rusqlite::Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(rusqlite::Connection::open_in_memory()?)
    }

    fn init(conn: rusqlite::Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                amount REAL,
                day INTEGER,
                category TEXT
            );",
            (),
        )?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn raw(&self) -> &rusqlite::Connection {
        &self.conn
    }

    /// Appends one expense, returning its assigned identifier. An absent
    /// category is stored as SQL NULL; an empty string is stored as given
    /// (folding into "Uncategorized" is a render-time concern).
    pub fn insert(
        &self,
        title: &str,
        amount: Amount,
        day: Day,
        category: Option<&str>,
    ) -> Result<i64, StoreError> {
        self.conn
            .execute(
                "INSERT INTO expenses (title, amount, day, category) VALUES (?1, ?2, ?3, ?4);",
                rusqlite::params![title, amount.0, i64::from(day.get()), category],
            )
            .map_err(Self::classify)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns all expenses ordered by day ascending, id breaking ties.
    /// Undecodable rows land in [`Scan::skipped`] and the scan continues.
    pub fn select_all(&self) -> Result<Scan, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, amount, day, category FROM expenses ORDER BY day ASC, id ASC;")
            .map_err(Self::classify)?;
        let rows = stmt.query_map([], Self::decode_row).map_err(Self::classify)?;

        let mut expenses = Vec::new();
        let mut skipped = Vec::new();
        for row in rows {
            match row {
                Ok(expense) => expenses.push(expense),
                Err(e) => skipped.push(e),
            }
        }
        Ok(Scan { expenses, skipped })
    }

    pub fn delete_all(&self) -> Result<usize, StoreError> {
        Ok(self.conn.execute("DELETE FROM expenses;", ())?)
    }

    /// Resets identifier numbering so the next insert gets id 1. Callers may
    /// treat a failure here as non-fatal; the deletion it follows is already
    /// durable.
    pub fn reset_sequence(&self) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM sqlite_sequence WHERE name = 'expenses';", ())?;
        Ok(())
    }

    /// Distinguishes "the table predates this schema" from other SQLite
    /// failures so the caller can direct the user to clear the store.
    fn classify(e: rusqlite::Error) -> StoreError {
        if let rusqlite::Error::SqliteFailure(_, Some(msg)) = &e {
            if msg.contains("no such column") || msg.contains("has no column named") {
                return StoreError::SchemaMismatch;
            }
        }
        e.into()
    }

    fn decode_row(row: &rusqlite::Row) -> Result<Expense, rusqlite::Error> {
        let id = row.get(0)?;
        let title: String = row.get(1)?;
        let amount: f64 = row.get(2)?;
        if !amount.is_finite() || amount < 0.0 {
            let cause = if amount < 0.0 {
                ParseAmountError::Negative
            } else {
                ParseAmountError::NotFinite
            };
            return Err(rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Real,
                Box::new(cause),
            ));
        }
        let day = Day::try_from(row.get::<_, i64>(3)?).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Integer,
                Box::new(e),
            )
        })?;
        let category: Option<String> = row.get(4)?;
        Ok(Expense::new(id, title, Amount(amount), day, category))
    }
}
