//! Classification tables.
//!
//! The tables are plain configuration handed to the filter. Defaults match
//! the page-load fixtures; a TOML file can replace any of them.
//!
//! ```toml
//! anchor = "TracingStartedInPage"
//! min_task_duration_us = 1000
//! always_keep = ["Screenshot", "navigationStart"]
//! process_scoped_keep = ["EvaluateScript"]
//! top_level_tasks = ["ThreadControllerImpl::DoWork"]
//! ```

use crate::utils::config::{
    ALWAYS_KEEP_NAMES, ANCHOR_EVENT_NAME, MIN_TASK_DURATION_US, PROCESS_SCOPED_KEEP_NAMES,
    TOP_LEVEL_TASK_NAMES,
};
use crate::utils::error::TablesError;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Which events survive filtering
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationTables {
    anchor: String,
    min_task_duration_us: f64,
    always_keep: HashSet<String>,
    process_scoped_keep: HashSet<String>,
    top_level_tasks: HashSet<String>,
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self::new(
            ANCHOR_EVENT_NAME,
            MIN_TASK_DURATION_US,
            ALWAYS_KEEP_NAMES.iter().copied(),
            PROCESS_SCOPED_KEEP_NAMES.iter().copied(),
            TOP_LEVEL_TASK_NAMES.iter().copied(),
        )
    }
}

impl ClassificationTables {
    /// Build tables from name lists.
    ///
    /// Top-level task names are always process-scoped, so they are added to
    /// the process-scoped set here.
    pub fn new<A, P, T>(
        anchor: impl Into<String>,
        min_task_duration_us: f64,
        always_keep: A,
        process_scoped_keep: P,
        top_level_tasks: T,
    ) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let top_level_tasks: HashSet<String> =
            top_level_tasks.into_iter().map(Into::into).collect();

        let mut process_scoped_keep: HashSet<String> =
            process_scoped_keep.into_iter().map(Into::into).collect();
        process_scoped_keep.extend(top_level_tasks.iter().cloned());

        Self {
            anchor: anchor.into(),
            min_task_duration_us,
            always_keep: always_keep.into_iter().map(Into::into).collect(),
            process_scoped_keep,
            top_level_tasks,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn with_min_task_duration(mut self, min_task_duration_us: f64) -> Self {
        self.min_task_duration_us = min_task_duration_us;
        self
    }

    /// Name of the event whose pid defines the main process
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn min_task_duration_us(&self) -> f64 {
        self.min_task_duration_us
    }

    pub fn is_always_kept(&self, name: &str) -> bool {
        self.always_keep.contains(name)
    }

    pub fn is_process_scoped(&self, name: &str) -> bool {
        self.process_scoped_keep.contains(name)
    }

    pub fn is_top_level_task(&self, name: &str) -> bool {
        self.top_level_tasks.contains(name)
    }

    /// Check that the tables can drive a filtering pass
    pub fn validate(&self) -> Result<(), TablesError> {
        if self.anchor.is_empty() {
            return Err(TablesError::Invalid("anchor name cannot be empty".to_string()));
        }

        if !self.min_task_duration_us.is_finite() || self.min_task_duration_us < 0.0 {
            return Err(TablesError::Invalid(format!(
                "min_task_duration_us must be a non-negative number, got {}",
                self.min_task_duration_us
            )));
        }

        Ok(())
    }
}

/// On-disk form of the tables; omitted keys keep their defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesFile {
    anchor: Option<String>,
    min_task_duration_us: Option<f64>,
    always_keep: Option<Vec<String>>,
    process_scoped_keep: Option<Vec<String>>,
    top_level_tasks: Option<Vec<String>>,
}

/// Parse tables from TOML text
///
/// # Errors
/// * `TablesError::Toml` - Invalid TOML or unknown keys
/// * `TablesError::Invalid` - Empty anchor or negative threshold
pub fn tables_from_toml(contents: &str) -> Result<ClassificationTables, TablesError> {
    let file: TablesFile = toml::from_str(contents)?;

    let owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();

    let tables = ClassificationTables::new(
        file.anchor.unwrap_or_else(|| ANCHOR_EVENT_NAME.to_string()),
        file.min_task_duration_us.unwrap_or(MIN_TASK_DURATION_US),
        file.always_keep.unwrap_or_else(|| owned(ALWAYS_KEEP_NAMES)),
        file.process_scoped_keep
            .unwrap_or_else(|| owned(PROCESS_SCOPED_KEEP_NAMES)),
        file.top_level_tasks.unwrap_or_else(|| owned(TOP_LEVEL_TASK_NAMES)),
    );

    tables.validate()?;
    Ok(tables)
}

/// Load tables from a TOML file
///
/// # Example
/// ```ignore
/// let tables = load_tables("tables.toml")?;
/// ```
pub fn load_tables(path: impl AsRef<Path>) -> Result<ClassificationTables, TablesError> {
    let path = path.as_ref();
    debug!("Loading classification tables from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    tables_from_toml(&contents)
}
