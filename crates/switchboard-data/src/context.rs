//! Lazily loaded, read-only data context.
//!
//! The source workbooks are read at most once per process. Instead of
//! ambient global state, the memoized tables live in an explicit
//! context value that is handed to the downstream stages, which keeps
//! the pipeline testable without the real workbooks.

use std::sync::OnceLock;

use crate::config::SourceConfig;
use crate::error::Result;
use crate::table::RawTable;
use crate::workbook;

/// The raw source tables, as loaded.
#[derive(Debug, Clone)]
pub struct LoadedTables {
    /// Wide forecast table (months by channel/LOB columns).
    pub forecast: RawTable,
    /// Concatenated cost-per-contact table.
    pub costs: RawTable,
}

/// Read-only holder of the loaded source tables.
///
/// The first call to [`DataContext::tables`] performs the workbook
/// I/O; every later call returns the cached tables. There is no
/// invalidation: a source file change requires a process restart.
#[derive(Debug)]
pub struct DataContext {
    config: SourceConfig,
    tables: OnceLock<LoadedTables>,
}

impl DataContext {
    /// Create a context over the given sources. No I/O happens yet.
    pub const fn new(config: SourceConfig) -> Self {
        Self {
            config,
            tables: OnceLock::new(),
        }
    }

    /// The source configuration this context loads from.
    pub const fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// The loaded tables, reading the workbooks on first access.
    pub fn tables(&self) -> Result<&LoadedTables> {
        if let Some(tables) = self.tables.get() {
            return Ok(tables);
        }

        let loaded = LoadedTables {
            forecast: workbook::load_forecast(&self.config)?,
            costs: workbook::load_costs(&self.config)?,
        };
        Ok(self.tables.get_or_init(|| loaded))
    }
}

impl From<SourceConfig> for DataContext {
    fn from(config: SourceConfig) -> Self {
        Self::new(config)
    }
}
