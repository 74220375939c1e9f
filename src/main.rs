use anyhow::Result;
use clap::Parser;
use onebuild::cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Cli::parse();
    match cli::run(args).await {
        // A failed compile is reported through notifications; the exit code just mirrors it.
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => Err(e),
    }
}
