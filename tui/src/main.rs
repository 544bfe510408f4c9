use clap::Parser;
use semdex_tui::Cli;
use semdex_tui::run_main;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    run_main(cli).await
}
