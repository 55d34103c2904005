use std::path::PathBuf;

/// Arguments for the minify command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct MinifyArgs {
    /// Trace to read
    pub input: PathBuf,

    /// Where to write the minified trace
    pub output: PathBuf,

    /// TOML file replacing the default classification tables
    pub tables: Option<PathBuf>,
}
