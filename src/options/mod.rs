use std::borrow::Cow;
use std::path::Path;

mod parse;
mod time_format;

pub use time_format::SqliteTimeFormat;

/// Options which configure how a SQLite connection stores timestamps, plus
/// the handful of open-mode flags that share the connection URI with them.
///
/// A value of `SqliteConnectOptions` can be parsed from a connection URI,
/// as described by [SQLite](https://www.sqlite.org/uri.html), with one
/// extension: the `_time_format` query parameter selects the on-disk
/// timestamp representation for the connection.
///
/// | URI | Description |
/// | -- | -- |
/// `sqlite::memory:` | Open an in-memory database. |
/// `sqlite:data.db` | Open the file `data.db` in the current directory. |
/// `sqlite://data.db?mode=ro` | Open the file `data.db` for read-only access. |
/// `sqlite://data.db?_time_format=unix` | Store timestamps as Unix seconds. |
///
/// Once a connection has been opened from these options, the resolved
/// [`SqliteTimeFormat`] is fixed for the connection's lifetime; there is no
/// per-value override.
///
/// # Example
///
/// ```rust
/// use sqlite_timestamp::{SqliteConnectOptions, SqliteTimeFormat};
/// use std::str::FromStr;
///
/// # fn main() -> Result<(), sqlite_timestamp::Error> {
/// let options = SqliteConnectOptions::from_str("sqlite://data.db?_time_format=unix_ms")?;
/// assert_eq!(options.get_time_format(), SqliteTimeFormat::UnixMs);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConnectOptions {
    pub(crate) filename: Cow<'static, Path>,
    pub(crate) in_memory: bool,
    pub(crate) read_only: bool,
    pub(crate) create_if_missing: bool,
    pub(crate) time_format: SqliteTimeFormat,
}

impl Default for SqliteConnectOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SqliteConnectOptions {
    pub fn new() -> Self {
        Self {
            filename: Cow::Borrowed(Path::new(":memory:")),
            in_memory: false,
            read_only: false,
            create_if_missing: false,
            time_format: SqliteTimeFormat::default(),
        }
    }

    /// Sets the name of the database file.
    pub fn filename(mut self, filename: impl AsRef<Path>) -> Self {
        self.filename = Cow::Owned(filename.as_ref().to_owned());
        self
    }

    /// Sets the [access mode](https://www.sqlite.org/c3ref/open.html) to open the database
    /// for read-only access.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Sets the [access mode](https://www.sqlite.org/c3ref/open.html) to create the database file
    /// if the file does not exist.
    ///
    /// By default, a new file **will not be** created if one is not found.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Sets the on-disk timestamp representation for the connection.
    ///
    /// The default is [`SqliteTimeFormat::Text`]: the canonical datetime text
    /// layout. Pick one representation per database and stick with it;
    /// values written under one format will not read back correctly under
    /// another through the typed path.
    pub fn time_format(mut self, time_format: SqliteTimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Returns the timestamp representation the connection will use.
    pub fn get_time_format(&self) -> SqliteTimeFormat {
        self.time_format
    }

    /// Returns the name of the database file, or `:memory:`.
    pub fn get_filename(&self) -> &Path {
        &self.filename
    }

    /// Returns `true` if the database is a pure in-memory database.
    pub fn get_in_memory(&self) -> bool {
        self.in_memory
    }

    /// Returns `true` if the database will be opened for read-only access.
    pub fn get_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns `true` if the database file will be created if it does not exist.
    pub fn get_create_if_missing(&self) -> bool {
        self.create_if_missing
    }
}
