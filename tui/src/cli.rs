use clap::Parser;

/// Codebase-index status indicator, driven by a simulated in-process
/// host.
#[derive(Debug, Clone, Parser)]
#[command(name = "semdex-tui", version)]
pub struct Cli {
    /// Number of files the simulated host pretends to index.
    #[arg(long, default_value_t = 200)]
    pub files: usize,

    /// Milliseconds between simulated progress ticks.
    #[arg(long, default_value_t = 80)]
    pub tick_ms: u64,

    /// Fail the first indexing pass once progress reaches this
    /// fraction (0.0..1.0).
    #[arg(long, value_name = "FRACTION")]
    pub fail_at: Option<f64>,

    /// Report the injected failure as index corruption, exercising the
    /// destructive-rebuild confirmation path.
    #[arg(long, default_value_t = false)]
    pub corrupt: bool,

    /// Pretend the host environment cannot show confirmation dialogs.
    #[arg(long, default_value_t = false)]
    pub no_confirm: bool,

    /// Pretend the host environment cannot run the built-in local
    /// embeddings provider.
    #[arg(long, default_value_t = false)]
    pub no_builtin_embeddings: bool,

    /// Active embeddings provider id reported by the environment.
    #[arg(long, value_name = "ID")]
    pub embeddings_provider: Option<String>,
}
