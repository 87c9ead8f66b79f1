use clap::Parser;

pub mod command;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log each conversion stage (equivalent to `RUST_LOG=debug`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub commands: command::Commands,
}

impl Cli {
    /// Installs the logger; `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_logger(&self) {
        let default_level = if self.verbose { "debug" } else { "warn" };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .init();
    }
}
