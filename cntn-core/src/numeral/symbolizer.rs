//! Chinese numeral text to symbol sequence

use crate::error::{Error, Result};
use crate::numeral::system::{Digit, MathKind, NumberingSystem, Symbol};

/// A Chinese numeral split into sign, integer symbols and fraction digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbolized {
    /// Leading 负 was present
    pub negative: bool,
    /// Integer part, digits and units only
    pub integer: Vec<Symbol>,
    /// Fraction digits after the point, read one by one
    pub fraction: Vec<Digit>,
}

/// Parse `text` into symbols using the tables of `system`
///
/// Every character must be a known digit, unit or math symbol. At most one
/// decimal point is allowed and a sign may only lead the numeral.
pub fn symbolize(text: &str, system: &NumberingSystem) -> Result<Symbolized> {
    let mut symbols = Vec::with_capacity(text.chars().count());
    for (position, ch) in text.chars().enumerate() {
        let symbol = system.lookup(ch).ok_or_else(|| Error::UnrecognizedSymbol {
            symbol: ch,
            position,
            input: text.to_string(),
        })?;
        symbols.push(symbol);
    }

    let mut points = symbols
        .iter()
        .enumerate()
        .filter(|(_, s)| matches!(s, Symbol::Math(m) if m.kind == MathKind::Point))
        .map(|(i, _)| i);
    let split = points.next();
    if points.next().is_some() {
        return Err(Error::malformed(text, "more than one decimal point"));
    }

    let (integer_part, fraction_part) = match split {
        Some(index) => (&symbols[..index], &symbols[index + 1..]),
        None => (&symbols[..], &symbols[symbols.len()..]),
    };

    let (negative, integer_part) = match integer_part.first() {
        Some(Symbol::Math(m)) if m.kind == MathKind::Negative => (true, &integer_part[1..]),
        _ => (false, integer_part),
    };

    if integer_part.iter().any(|s| matches!(s, Symbol::Math(_))) {
        return Err(Error::malformed(text, "sign symbol inside the integer part"));
    }

    let fraction = fraction_part
        .iter()
        .map(|s| match s {
            Symbol::Digit(digit) => Ok(*digit),
            _ => Err(Error::malformed(
                text,
                format!("'{s}' is not allowed after the decimal point"),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Symbolized {
        negative,
        integer: integer_part.to_vec(),
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::system::NumberingType;

    fn system() -> NumberingSystem {
        NumberingSystem::new(NumberingType::Mid)
    }

    fn render(symbols: &[Symbol]) -> String {
        symbols.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_integer_only() {
        let parsed = symbolize("一百二十三", &system()).unwrap();
        assert!(!parsed.negative);
        assert_eq!(render(&parsed.integer), "1 10^2 2 10^1 3");
        assert!(parsed.fraction.is_empty());
    }

    #[test]
    fn test_fraction_split() {
        let parsed = symbolize("三點一四", &system()).unwrap();
        assert_eq!(render(&parsed.integer), "3");
        let digits: Vec<u8> = parsed.fraction.iter().map(|d| d.value).collect();
        assert_eq!(digits, vec![1, 4]);
    }

    #[test]
    fn test_negative_sign() {
        let parsed = symbolize("负五", &system()).unwrap();
        assert!(parsed.negative);
        assert_eq!(render(&parsed.integer), "5");
    }

    #[test]
    fn test_empty_input() {
        let parsed = symbolize("", &system()).unwrap();
        assert!(parsed.integer.is_empty());
        assert!(parsed.fraction.is_empty());
    }

    #[test]
    fn test_two_points_rejected() {
        let err = symbolize("一点二点三", &system()).unwrap_err();
        assert!(matches!(err, Error::MalformedNumeral { .. }));

        let err = symbolize("一点二點三", &system()).unwrap_err();
        assert!(matches!(err, Error::MalformedNumeral { .. }));
    }

    #[test]
    fn test_unrecognized_symbol_rejected() {
        let err = symbolize("一百个", &system()).unwrap_err();
        match err {
            Error::UnrecognizedSymbol { symbol, position, .. } => {
                assert_eq!(symbol, '个');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_misplaced_sign_rejected() {
        assert!(matches!(
            symbolize("五负", &system()),
            Err(Error::MalformedNumeral { .. })
        ));
        assert!(matches!(
            symbolize("五点负", &system()),
            Err(Error::MalformedNumeral { .. })
        ));
    }

    #[test]
    fn test_unit_in_fraction_rejected() {
        assert!(matches!(
            symbolize("五点十", &system()),
            Err(Error::MalformedNumeral { .. })
        ));
    }
}
