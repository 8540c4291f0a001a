//! Ellipsis repair for integer symbol sequences
//!
//! Spoken numerals drop leading and trailing symbols when the meaning is
//! clear: 十五 is 一十五, 一百八 is 一百八十, and 一亿一千三百万 shares the
//! trailing 万 across 一千 and 三百. [`correct`] rewrites such sequences
//! so that every digit is followed by the full power it multiplies.

use crate::numeral::system::{NumberingSystem, Symbol, Unit};

/// Repair an integer-part symbol sequence for evaluation
pub fn correct(symbols: &[Symbol], system: &NumberingSystem) -> Vec<Symbol> {
    let mut symbols = symbols.to_vec();

    // 十五 -> 一十五
    if matches!(symbols.first(), Some(Symbol::Unit(unit)) if unit.power == 1) {
        symbols.insert(0, Symbol::Digit(system.digit(1)));
    }

    // 一百八 -> 一百八十
    let dangling = match symbols.as_slice() {
        [.., Symbol::Unit(last_unit), Symbol::Digit(_)] if last_unit.power > 0 => {
            Some(last_unit.power - 1)
        }
        _ => None,
    };
    if let Some(power) = dangling {
        symbols.push(Symbol::Unit(Unit::synthetic(power)));
    }

    let mut result: Vec<Symbol> = Vec::with_capacity(symbols.len());
    let mut unit_count = 0usize;
    for symbol in symbols {
        match symbol {
            Symbol::Digit(_) => {
                result.push(symbol);
                unit_count = 0;
            }
            Symbol::Unit(unit) => {
                unit_count += 1;
                merge_into_group(&mut result, unit.power);
                // Stacked units (三百万) only scale the group, they add no term
                if unit_count == 1 {
                    result.push(Symbol::Unit(Unit::synthetic(unit.power)));
                }
            }
            // The symbolizer strips signs and points from the integer part
            Symbol::Math(_) => {}
        }
    }

    tracing::trace!(
        sequence = %result.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
        "corrected symbols"
    );
    result
}

/// Add `power` to every emitted unit of the current magnitude group
///
/// Walks back from the end and stops at the first unit that is already at
/// least as large as `power`, so 五千六百七十八万 scales 千/百/十 by 万
/// while 三万五千 leaves 万 alone.
fn merge_into_group(result: &mut [Symbol], power: u32) {
    for symbol in result.iter_mut().rev() {
        if let Symbol::Unit(previous) = symbol {
            if previous.power >= power {
                break;
            }
            *symbol = Symbol::Unit(Unit::synthetic(previous.power + power));
        }
    }
}
