use clap::Parser;
use epub_splitter::errors::ConvertResult;
use epub_splitter_cli::Cli;
use epub_splitter_cli::command::Commands;

fn main() -> ConvertResult<()> {
    let cli = Cli::parse();
    cli.init_logger();

    match cli.commands {
        Commands::Split(split) => split.run()?,
        Commands::Clean(clean) => clean.run()?,
        Commands::Fix(fix) => fix.run()?,
    }

    Ok(())
}
