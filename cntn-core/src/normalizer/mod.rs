//! Number normalization inside mixed text
//!
//! Text is uppercased, split into runs by the [`Tokenizer`], and each number
//! run is spoken according to [`choose_reading`]. Everything else passes
//! through unchanged.

pub mod policy;
pub mod tokenizer;
pub mod units;

pub use policy::{choose_reading, Reading, DIGIT_READING_MIN_LEN, YEAR_MARKER};
pub use tokenizer::{Run, RunKind, Tokenizer};
pub use units::{UnitRole, UnitSymbol, UnitTable, UnitTableConfig};

use crate::config::ConversionConfig;
use crate::error::Result;
use crate::numeral::number_to_chinese;

/// Rewrites numbers in text as spoken Chinese
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: ConversionConfig,
    units: UnitTable,
}

impl Normalizer {
    /// Normalizer with the built-in unit table
    pub fn new(config: ConversionConfig) -> Result<Self> {
        Ok(Self::with_units(config, UnitTable::builtin()?))
    }

    /// Normalizer with a caller-supplied unit table
    pub fn with_units(config: ConversionConfig, units: UnitTable) -> Self {
        Self { config, units }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Uppercase `text` and split it into runs
    pub fn tokenize(&self, text: &str) -> Vec<Run> {
        Tokenizer::new(&self.units).tokenize(&text.to_uppercase())
    }

    /// Replace every number run with its spoken form
    pub fn normalize(&self, text: &str) -> Result<String> {
        let runs = self.tokenize(text);
        self.render_runs(&runs)
    }

    /// Render already tokenized runs
    pub fn render_runs(&self, runs: &[Run]) -> Result<String> {
        let mut output = String::with_capacity(runs.iter().map(|r| r.text.len() * 3).sum());
        let mut index = 0;

        while let Some(run) = runs.get(index) {
            index += 1;
            if run.kind != RunKind::Number {
                output.push_str(&run.text);
                continue;
            }

            let reading = choose_reading(run, runs.get(index), &self.units);
            tracing::debug!(number = %run.text, ?reading, "number reading");

            match reading {
                Reading::PreUnit(unit) => {
                    output.push_str(unit);
                    output.push_str(&number_to_chinese(&run.text, &self.config)?);
                }
                Reading::PostUnit(unit) => {
                    output.push_str(&number_to_chinese(&run.text, &self.config)?);
                    output.push_str(unit);
                }
                Reading::DigitByDigit => {
                    output.push_str(&number_to_chinese(&run.text, &self.config.without_units())?);
                }
                Reading::Magnitude => {
                    output.push_str(&number_to_chinese(&run.text, &self.config)?);
                }
            }
            if reading.consumes_next() {
                index += 1;
            }
        }

        Ok(output)
    }
}

/// Normalize `text` with the built-in unit table
///
/// ```
/// use cntn_core::{normalize, ConversionConfig};
///
/// let text = normalize("2018年跑了3km", &ConversionConfig::default()).unwrap();
/// assert_eq!(text, "二零一八年跑了三公里");
/// ```
pub fn normalize(text: &str, config: &ConversionConfig) -> Result<String> {
    Normalizer::new(*config)?.normalize(text)
}
