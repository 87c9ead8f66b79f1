use crate::command::ConvertArgs;
use clap::Args;
use epub_splitter::errors::ConvertResult;
use epub_splitter::{ConvertMode, ConvertOptions};

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub convert: ConvertArgs,
}

impl FixCommand {
    pub fn run(&self) -> ConvertResult<()> {
        self.convert
            .convert(&mut ConvertOptions::new(), ConvertMode::FixCover)
    }
}
