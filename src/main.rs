use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sandogh::adapters::manifest;
use sandogh::drivers::db::Db;
use sandogh::interactors::setup::Setup;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the application property store.
    #[arg(short, long, value_name = "DIR", default_value = "sandogh.db")]
    path: PathBuf,

    /// JSON manifest of user/key records; omit to provision the built-in
    /// seed list.
    #[arg(short, long, value_name = "FILE")]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sandogh=info")),
        )
        .init();

    let cli = Cli::parse();

    let db = Db::open(&cli.path)?;

    let setup = match &cli.manifest {
        Some(path) => Setup::with_users(manifest::load(path)?),
        None => {
            let mut setup = Setup::new();
            // Edit the seed list here, then re-run.
            setup.add_user("usuario", "password");
            setup
        }
    };

    setup.run(&db)?;

    Ok(())
}
