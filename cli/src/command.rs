use clap::{Args, Subcommand};
use epub_splitter::errors::ConvertResult;
use epub_splitter::{ConvertMode, ConvertOptions, output_file_name};
use std::path::PathBuf;

mod clean;
mod fix;
mod split;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split chapters exceeding a word count at paragraph boundaries.
    Split(split::SplitCommand),
    /// Strip ruby annotations from every chapter.
    Clean(clean::CleanCommand),
    /// Repair broken image references of the cover page.
    Fix(fix::FixCommand),
}

/// Arguments shared by every conversion.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// The EPUB file to convert
    pub epub_path: PathBuf,

    /// Where to save the result [default: `<epub_path>` with a `_split`, `_cleaned` or `_fixed` suffix]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Deflate level of the output archive (0-9)
    #[arg(long, default_value_t = ConvertOptions::DEFAULT_COMPRESSION, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression: u8,
}

impl ConvertArgs {
    /// Converts the input with `options` and saves the result.
    ///
    /// Nothing is written when the conversion fails.
    fn convert(&self, options: &mut ConvertOptions, mode: ConvertMode) -> ConvertResult<()> {
        log::debug!("Converting `{}` ({mode})", self.epub_path.display());

        let conversion = options
            .mode(mode)
            .compression(self.compression)
            .convert_file(&self.epub_path)?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| output_file_name(&self.epub_path, mode));

        conversion.save(&output)?;

        for warning in conversion.warnings() {
            eprintln!("warning: {warning}");
        }
        println!("{}", output.display());
        Ok(())
    }
}
