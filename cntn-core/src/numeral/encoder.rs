//! Arabic numeral string to Chinese text

use crate::config::ConversionConfig;
use crate::error::{Error, Result};
use crate::numeral::system::{NumberingSystem, Script, Symbol};

/// Rendering flags resolved once per call
///
/// `big` wins over `traditional` for the script and switches off `alt_two`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderVariant {
    pub script: Script,
    pub alt_zero: bool,
    pub alt_two: bool,
}

impl From<&ConversionConfig> for RenderVariant {
    fn from(config: &ConversionConfig) -> Self {
        let script = match (config.big, config.traditional) {
            (true, true) => Script::BigTraditional,
            (true, false) => Script::BigSimplified,
            (false, true) => Script::Traditional,
            (false, false) => Script::Simplified,
        };
        Self {
            script,
            alt_zero: config.alt_zero,
            alt_two: config.alt_two && !config.big,
        }
    }
}

/// Convert an Arabic numeral string such as `"-1161.05"` to Chinese
pub fn encode(value: &str, config: &ConversionConfig) -> Result<String> {
    let system = NumberingSystem::new(config.numbering_type);
    let variant = RenderVariant::from(config);

    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if let Some(bad) = unsigned.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(Error::malformed(value, format!("unexpected character '{bad}'")));
    }
    let mut parts = unsigned.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(Error::malformed(value, "more than one decimal point"));
    }

    let mut symbols = if config.use_units && integer.len() > 1 {
        encode_magnitude(integer, &system, config.use_zeros)
    } else {
        digit_symbols(integer, &system)
    };
    if !fraction.is_empty() {
        symbols.push(Symbol::Math(system.point()));
        symbols.extend(digit_symbols(fraction, &system));
    }

    let mut text = render(&symbols, variant);
    if text.starts_with(system.point().forms.render(variant.script)) {
        // Prefixed after the 〇 pass, so always the regular zero
        text.insert(0, system.digit(0).forms.render(variant.script));
    }
    let text = elide_leading_one(text, &system);

    tracing::trace!(value, rendered = %text, "encoded numeral");

    if negative && !text.is_empty() {
        let sign = system.negative().forms.render(variant.script);
        Ok(format!("{sign}{text}"))
    } else {
        Ok(text)
    }
}

/// Positional decomposition into digits and units
///
/// Splits at the largest unit below the digit count and recurses on both
/// halves; the head keeps its leading zeros so a skipped position reads 零.
fn encode_magnitude(digits: &str, system: &NumberingSystem, use_zeros: bool) -> Vec<Symbol> {
    let stripped = digits.trim_start_matches('0');

    match stripped.len() {
        0 => Vec::new(),
        1 => {
            let digit = Symbol::Digit(system.digit(stripped.as_bytes()[0] - b'0'));
            if use_zeros && digits.len() != stripped.len() {
                vec![Symbol::Digit(system.digit(0)), digit]
            } else {
                vec![digit]
            }
        }
        len => {
            let Some(unit) = system.largest_unit_below(len) else {
                return digit_symbols(stripped, system);
            };
            let power = unit.power as usize;
            let head = &digits[..digits.len() - power];
            let tail = &stripped[len - power..];

            let mut symbols = encode_magnitude(head, system, use_zeros);
            symbols.push(Symbol::Unit(unit));
            symbols.extend(encode_magnitude(tail, system, use_zeros));
            symbols
        }
    }
}

fn digit_symbols(digits: &str, system: &NumberingSystem) -> Vec<Symbol> {
    digits
        .bytes()
        .map(|b| Symbol::Digit(system.digit(b - b'0')))
        .collect()
}

fn render(symbols: &[Symbol], variant: RenderVariant) -> String {
    let mut text = String::with_capacity(symbols.len() * 3);
    for (index, symbol) in symbols.iter().enumerate() {
        match symbol {
            Symbol::Digit(digit)
                if variant.alt_two && digit.value == 2 && reads_as_liang(symbols, index) =>
            {
                text.push(digit.render_alt(variant.script));
            }
            Symbol::Digit(digit) if variant.alt_zero && digit.value == 0 => {
                text.push(digit.render_alt(variant.script));
            }
            _ => text.extend(symbol.render(variant.script)),
        }
    }
    text
}

/// 两 is used before 百/千/万/…, never before 十 or after 十
fn reads_as_liang(symbols: &[Symbol], index: usize) -> bool {
    let next_is_large = matches!(symbols.get(index + 1), Some(Symbol::Unit(u)) if u.power != 1);
    let previous_allows = match index.checked_sub(1).map(|i| &symbols[i]) {
        None => true,
        Some(Symbol::Unit(u)) => u.power != 1,
        Some(_) => false,
    };
    next_is_large && previous_allows
}

/// 一十五 -> 十五, in any script
fn elide_leading_one(text: String, system: &NumberingSystem) -> String {
    let one = system.digit(1).forms;
    let ten = system.units().first().and_then(|unit| unit.forms);

    let mut chars = text.chars();
    match (chars.next(), chars.next(), ten) {
        (Some(first), Some(second), Some(ten)) if one.contains(first) && ten.contains(second) => {
            text[first.len_utf8()..].to_string()
        }
        _ => text,
    }
}
