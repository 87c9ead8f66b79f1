use crate::command::ConvertArgs;
use clap::Args;
use epub_splitter::epub::CleanMode;
use epub_splitter::errors::ConvertResult;
use epub_splitter::{ConvertMode, ConvertOptions};

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// 1: keep only the base text, 2: keep only the readings
    #[arg(short, long, default_value_t = 1)]
    pub mode: u8,
}

impl CleanCommand {
    pub fn run(&self) -> ConvertResult<()> {
        let mode = CleanMode::try_from(self.mode)?;

        self.convert
            .convert(&mut ConvertOptions::new(), ConvertMode::Clean(mode))
    }
}
