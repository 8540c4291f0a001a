//! Bidirectional conversion between Arabic and Chinese numerals
//!
//! Chinese → number: [`symbolize`](symbolizer::symbolize) →
//! [`correct`](corrector::correct) → [`evaluate_integer`](evaluator::evaluate_integer).
//! Number → Chinese: [`encode`](encoder::encode).

pub mod corrector;
pub mod encoder;
pub mod evaluator;
pub mod symbolizer;
pub mod system;

pub use encoder::RenderVariant;
pub use evaluator::Number;
pub use system::{
    Digit, Forms, MathKind, MathSymbol, NumberingSystem, NumberingType, Script, Symbol, Unit,
};

use crate::config::ConversionConfig;
use crate::error::Result;

/// Convert an Arabic numeral string to its Chinese reading
///
/// ```
/// use cntn_core::{number_to_chinese, ConversionConfig};
///
/// let config = ConversionConfig::default();
/// assert_eq!(number_to_chinese("1161", &config).unwrap(), "一千一百六十一");
/// ```
pub fn number_to_chinese(value: &str, config: &ConversionConfig) -> Result<String> {
    encoder::encode(value, config)
}

/// Convert a Chinese numeral to its value
///
/// ```
/// use cntn_core::{chinese_to_number, Number, NumberingType};
///
/// let value = chinese_to_number("一万零四百零三点八零五", NumberingType::Mid).unwrap();
/// assert_eq!(value, Number::Float(10403.805));
/// ```
pub fn chinese_to_number(text: &str, numbering_type: NumberingType) -> Result<Number> {
    let system = NumberingSystem::new(numbering_type);
    let parsed = symbolizer::symbolize(text, &system)?;
    let integer = corrector::correct(&parsed.integer, &system);
    let value = evaluator::evaluate_integer(&integer);
    let number = evaluator::join_fraction(value, &parsed.fraction, text)?;

    if parsed.negative {
        Ok(number.negate())
    } else {
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(
            chinese_to_number("一万零四百零三点八零五", NumberingType::Mid).unwrap(),
            Number::Float(10403.805)
        );
        assert_eq!(
            chinese_to_number("一亿零六点三", NumberingType::Mid).unwrap(),
            Number::Float(100000006.3)
        );
        assert_eq!(
            chinese_to_number("一亿六点三", NumberingType::Mid).unwrap(),
            Number::Float(160000000.3)
        );
        assert_eq!(
            chinese_to_number("两千零一亿六点三", NumberingType::Mid).unwrap(),
            Number::Float(200160000000.3)
        );
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(
            chinese_to_number("负三点一四", NumberingType::Mid).unwrap(),
            Number::Float(-3.14)
        );
        assert_eq!(
            chinese_to_number("負十五", NumberingType::Mid).unwrap(),
            Number::integer(-15)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            chinese_to_number("", NumberingType::Low).unwrap(),
            Number::integer(0)
        );
        assert_eq!(number_to_chinese("", &ConversionConfig::default()).unwrap(), "");
    }

    #[test]
    fn test_big_and_alternate_glyphs_parse() {
        assert_eq!(
            chinese_to_number("壹萬貳仟叁佰肆拾伍", NumberingType::Mid).unwrap(),
            Number::integer(12345)
        );
        assert_eq!(
            chinese_to_number("两千〇一", NumberingType::Mid).unwrap(),
            Number::integer(2001)
        );
    }

    #[test]
    fn test_round_trip_each_numbering_type() {
        for numbering_type in NumberingType::ALL {
            let config = ConversionConfig::builder().numbering(numbering_type).build();
            for value in [9u64, 10, 11, 19, 99, 100, 101, 999, 1000, 10000, 100000000, 100000001] {
                let text = number_to_chinese(&value.to_string(), &config).unwrap();
                assert_eq!(
                    chinese_to_number(&text, numbering_type).unwrap(),
                    Number::integer(value),
                    "{numbering_type}: {value} -> {text}"
                );
            }
        }
    }

    #[test]
    fn test_largest_units_round_trip() {
        let mid = ConversionConfig::builder().numbering(NumberingType::Mid).build();
        let ten_pow_40 = format!("1{}", "0".repeat(40));
        let text = number_to_chinese(&ten_pow_40, &mid).unwrap();
        assert_eq!(text, "一正");
        let parsed = chinese_to_number(&text, NumberingType::Mid).unwrap();
        assert_eq!(parsed.to_string(), ten_pow_40);

        let high = ConversionConfig::builder().numbering(NumberingType::High).build();
        let value = format!("3{}", "0".repeat(70));
        let text = number_to_chinese(&value, &high).unwrap();
        let parsed = chinese_to_number(&text, NumberingType::High).unwrap();
        assert_eq!(parsed.to_string(), value);
    }
}
