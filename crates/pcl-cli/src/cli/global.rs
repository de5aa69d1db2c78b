use clap::ValueEnum;

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns for humans.
    Table,
    /// Compact single-line JSON.
    Raw,
}

/// Flags accepted before or after any subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    /// Answer yes to every confirmation prompt.
    pub yes: bool,
    pub base_url: Option<String>,
}

impl GlobalFlags {
    /// Rows to print: `--limit` if given, else `general.default_limit`.
    #[must_use]
    pub fn row_limit(&self, configured: u32) -> usize {
        usize::try_from(self.limit.unwrap_or(configured)).unwrap_or(usize::MAX)
    }
}
