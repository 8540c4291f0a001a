//! Num2cn command implementation

use anyhow::Result;
use clap::Args;
use cntn_core::{number_to_chinese, ConversionConfig, NumberingType};

use crate::error::CliError;

/// Arguments for the num2cn command
#[derive(Debug, Args)]
pub struct Num2CnArgs {
    /// Arabic numeral, e.g. 1161, -0.5 or 10403.805
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Numbering system for units above 万
    #[arg(short, long, default_value = "low", value_parser = super::parse_numbering)]
    pub numbering: NumberingType,

    /// Formal (financial) glyphs
    #[arg(short, long)]
    pub big: bool,

    /// Traditional glyphs
    #[arg(short, long)]
    pub traditional: bool,

    /// Write zero as 〇
    #[arg(long)]
    pub alt_zero: bool,

    /// Write two as 两 before 百/千/万
    #[arg(long)]
    pub alt_two: bool,

    /// Drop 零 for skipped positions
    #[arg(long)]
    pub no_zeros: bool,

    /// Read digit by digit
    #[arg(long)]
    pub no_units: bool,
}

impl Num2CnArgs {
    /// Conversion configuration selected by the flags
    pub fn config(&self) -> ConversionConfig {
        ConversionConfig::builder()
            .numbering(self.numbering)
            .big(self.big)
            .traditional(self.traditional)
            .alt_zero(self.alt_zero)
            .alt_two(self.alt_two)
            .use_zeros(!self.no_zeros)
            .use_units(!self.no_units)
            .build()
    }

    /// Execute the num2cn command
    pub fn execute(&self) -> Result<()> {
        let config = self.config();
        log::info!("Converting {} with {:?}", self.value, config);

        let text = number_to_chinese(&self.value, &config).map_err(CliError::from)?;
        println!("{text}");
        Ok(())
    }
}
