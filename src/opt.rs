use anyhow::Result;
use anyhow::bail;
use build_db::Config;
use build_db::DEFAULT_ASSET;
use pico_args::Arguments;
use std::path::PathBuf;

pub const HELP: &str = "\
Build an SQLite database from its SQL dump

USAGE:
  build-db [OPTIONS]

With no options, reads assets/db_src/irblaster.sql and writes
assets/db/irblaster.sqlite, relative to the current directory.

OPTIONS:
  --root <DIR>        Directory containing assets/ [default: .]
  --name <NAME>       Asset name [default: irblaster]
  --script <FILE>     SQL script to read, overrides --root/--name
  --output <FILE>     Database to write, overrides --root/--name
  --min-size <BYTES>  Smallest acceptable output [default: 1024]
  -h, --help          Print help
";

#[derive(Debug, PartialEq)]
pub struct Args {
    pub help: bool,
    pub root: PathBuf,
    pub name: String,
    pub script: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub min_size: Option<u64>,
}

impl Args {
    pub fn parse(mut args: Arguments) -> Result<Self> {
        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            root: args
                .opt_value_from_str("--root")?
                .unwrap_or_else(|| PathBuf::from(".")),
            name: args
                .opt_value_from_str("--name")?
                .unwrap_or_else(|| DEFAULT_ASSET.to_string()),
            script: args.opt_value_from_str("--script")?,
            output: args.opt_value_from_str("--output")?,
            min_size: args.opt_value_from_str("--min-size")?,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            bail!("unexpected arguments: {remaining:?}");
        }

        Ok(parsed)
    }

    pub fn into_config(self) -> Config {
        let mut config = Config::for_asset(&self.root, &self.name);

        if let Some(script) = self.script {
            config.script_path = script;
        }

        if let Some(output) = self.output {
            config.output_path = output;
        }

        match self.min_size {
            Some(min_size) => config.with_min_size(min_size),
            None => config,
        }
    }
}
