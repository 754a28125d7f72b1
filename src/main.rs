mod opt;

use anyhow::Result;
use build_db::materialize;
use opt::Args;
use pico_args::Arguments;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse(Arguments::from_env())?;

    if args.help {
        print!("{}", opt::HELP);
        return Ok(());
    }

    let artifact = materialize(&args.into_config())?;

    println!("[OK] {artifact}");

    Ok(())
}
