use crate::command::ConvertArgs;
use clap::Args;
use epub_splitter::errors::ConvertResult;
use epub_splitter::{ConvertMode, ConvertOptions};

#[derive(Debug, Args)]
pub struct SplitCommand {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Target number of words per part
    #[arg(short, long, default_value_t = ConvertOptions::DEFAULT_TARGET_WORD_COUNT)]
    pub words: usize,
}

impl SplitCommand {
    pub fn run(&self) -> ConvertResult<()> {
        let mut options = ConvertOptions::new();
        options.target_word_count(self.words);

        self.convert.convert(&mut options, ConvertMode::Split)
    }
}
