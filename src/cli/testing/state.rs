use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// An expected store row: (id, title, amount, day, category).
pub type Row<'a> = (i64, &'a str, f64, i64, Option<&'a str>);

/// A store row to seed, without an id: (title, amount, day, category).
/// Identifiers are assigned by the store, starting from 1.
pub type Seed<'a> = (&'a str, f64, i64, Option<&'a str>);

/// The expected or actual contents of an app directory. Unset fields
/// correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    expenses: Option<Vec<base::Expense>>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the expected store contents. Rows may be given in any order; they
    /// are compared in the store's (day, id) order.
    pub fn with_expenses(mut self, rows: &[Row]) -> Self {
        let mut rows = rows.to_vec();
        rows.sort_by_key(|(id, _, _, day, _)| (*day, *id));
        self.expenses = Some(
            rows.iter()
                .map(|(id, title, amount, day, category)| {
                    base::Expense::new(
                        *id,
                        title.to_string(),
                        base::Amount(*amount),
                        base::Day::try_from(*day).unwrap(),
                        category.map(str::to_string),
                    )
                })
                .collect(),
        );
        self
    }

    /// Reads the actual directory contents back from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = if fs.config_path().is_file() {
            Some(fs.read_config().unwrap())
        } else {
            None
        };
        let expenses = if fs.store_path().is_file() {
            let store = base::Store::open(fs.store_path()).unwrap();
            let scan = store.select_all().unwrap();
            assert!(
                scan.skipped.is_empty(),
                "test stores should not contain undecodable rows",
            );
            Some(scan.expenses)
        } else {
            None
        };

        Self { config, expenses }
    }
}

/// Raw initial contents of an app directory. Unset fields correspond to
/// nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    rows: Option<&'a [Seed<'a>]>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the config file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Seeds the store with the given rows, creating the database file.
    pub fn with_rows(mut self, rows: &'a [Seed<'a>]) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Materializes the initial state under `fs`. Panics if the config
    /// string is not a valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let parsed = s.parse::<base::Config>();
            assert!(parsed.is_ok(), "{:?}", parsed);
            std::fs::write(fs.config_path(), s).unwrap();
        }
        if let Some(rows) = self.rows {
            let store = base::Store::open(fs.store_path()).unwrap();
            for (title, amount, day, category) in rows {
                store
                    .insert(
                        title,
                        base::Amount(*amount),
                        base::Day::try_from(*day).unwrap(),
                        *category,
                    )
                    .unwrap();
            }
        }
    }

    pub fn to_state(&self) -> State {
        let mut state = State::new();
        if let Some(s) = self.config {
            state = state.with_config(s);
        }
        if let Some(rows) = self.rows {
            let with_ids = rows
                .iter()
                .enumerate()
                .map(|(i, (title, amount, day, category))| {
                    (i as i64 + 1, *title, *amount, *day, *category)
                })
                .collect::<Vec<_>>();
            state = state.with_expenses(&with_ids);
        }
        state
    }
}
