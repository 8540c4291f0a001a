//! Reading policy for number runs

use crate::normalizer::tokenizer::Run;
use crate::normalizer::units::{UnitRole, UnitTable};

/// Marker after which a number is read as a year
pub const YEAR_MARKER: char = '年';

/// Integers with at least this many digits are read digit by digit
pub const DIGIT_READING_MIN_LEN: usize = 8;

/// How a number run is spoken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading<'a> {
    /// Unit reading, then the number; the next run is consumed
    PreUnit(&'a str),
    /// The number, then the unit reading; the next run is consumed
    PostUnit(&'a str),
    /// Digit by digit without unit words (years, phone numbers, IDs)
    DigitByDigit,
    /// Positional reading with the caller's configuration
    Magnitude,
}

impl Reading<'_> {
    /// Whether the run after the number was absorbed into this reading
    pub fn consumes_next(&self) -> bool {
        matches!(self, Reading::PreUnit(_) | Reading::PostUnit(_))
    }
}

/// Decide how to read `number` given the run that follows it
pub fn choose_reading<'a>(number: &Run, next: Option<&Run>, units: &'a UnitTable) -> Reading<'a> {
    if let Some(unit) = next.and_then(|run| units.get(&run.text)) {
        return match unit.role {
            UnitRole::Pre => Reading::PreUnit(&unit.reading),
            UnitRole::Post => Reading::PostUnit(&unit.reading),
        };
    }

    let before_year = next.is_some_and(|run| run.text.starts_with(YEAR_MARKER));
    if number.is_integer() && (before_year || number.text.len() >= DIGIT_READING_MIN_LEN) {
        return Reading::DigitByDigit;
    }

    Reading::Magnitude
}
