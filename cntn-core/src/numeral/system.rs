//! Digit, unit and math-symbol tables for a numbering variant
//!
//! A [`NumberingSystem`] is rebuilt for every conversion call and owns no
//! shared state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
const BIG_DIGITS_SIMPLIFIED: [char; 10] = [
    '零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖',
];
const BIG_DIGITS_TRADITIONAL: [char; 10] = [
    '零', '壹', '貳', '參', '肆', '伍', '陸', '柒', '捌', '玖',
];

const SMALL_UNITS_SIMPLIFIED: [char; 4] = ['十', '百', '千', '万'];
const SMALL_UNITS_TRADITIONAL: [char; 4] = ['十', '百', '千', '萬'];
const BIG_SMALL_UNITS_SIMPLIFIED: [char; 4] = ['拾', '佰', '仟', '万'];
const BIG_SMALL_UNITS_TRADITIONAL: [char; 4] = ['拾', '佰', '仟', '萬'];

const LARGE_UNITS_SIMPLIFIED: [char; 10] = [
    '亿', '兆', '京', '垓', '秭', '穰', '沟', '涧', '正', '载',
];
const LARGE_UNITS_TRADITIONAL: [char; 10] = [
    '億', '兆', '京', '垓', '秭', '穰', '溝', '澗', '正', '載',
];

const ZERO_ALT: char = '〇';
const TWO_ALT_SIMPLIFIED: char = '两';
const TWO_ALT_TRADITIONAL: char = '兩';

const POSITIVE: [char; 2] = ['正', '正'];
const NEGATIVE: [char; 2] = ['负', '負'];
const POINT: [char; 2] = ['点', '點'];

/// How large units (亿 and above) scale relative to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NumberingType {
    /// Each large unit is ten times the previous one (兆 = 10^9)
    #[default]
    Low,
    /// Each large unit is 10^4 times the previous one (兆 = 10^12)
    Mid,
    /// Each large unit squares the previous one (兆 = 10^16)
    High,
}

impl NumberingType {
    /// All supported numbering types
    pub const ALL: [NumberingType; 3] = [
        NumberingType::Low,
        NumberingType::Mid,
        NumberingType::High,
    ];

    /// Lowercase name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingType::Low => "low",
            NumberingType::Mid => "mid",
            NumberingType::High => "high",
        }
    }

    /// Power of ten carried by the large unit at `index` (亿 is index 0)
    fn large_unit_power(&self, index: u32) -> u32 {
        match self {
            NumberingType::Low => index + 8,
            NumberingType::Mid => (index + 2) * 4,
            NumberingType::High => 2u32.pow(index + 3),
        }
    }
}

impl FromStr for NumberingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(NumberingType::Low),
            "mid" => Ok(NumberingType::Mid),
            "high" => Ok(NumberingType::High),
            _ => Err(Error::InvalidNumberingType(s.to_string())),
        }
    }
}

impl TryFrom<String> for NumberingType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for NumberingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Script a symbol is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// 一二三 / 十百千万
    Simplified,
    /// 一二三 / 十百千萬
    Traditional,
    /// 壹贰叁 / 拾佰仟万
    BigSimplified,
    /// 壹貳參 / 拾佰仟萬
    BigTraditional,
}

impl Script {
    /// Whether this is one of the formal (financial) scripts
    pub fn is_big(&self) -> bool {
        matches!(self, Script::BigSimplified | Script::BigTraditional)
    }

    /// Whether this script uses traditional glyphs
    pub fn is_traditional(&self) -> bool {
        matches!(self, Script::Traditional | Script::BigTraditional)
    }
}

/// The four textual forms of a symbol
///
/// Ordinary traditional units are 十百千萬, not the formal 拾佰仟, and the
/// formal simplified 万 stays 万. Both follow current usage rather than the
/// older tables that mixed formal glyphs into the ordinary traditional set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forms {
    pub simplified: char,
    pub traditional: char,
    pub big_simplified: char,
    pub big_traditional: char,
}

impl Forms {
    const fn new(
        simplified: char,
        traditional: char,
        big_simplified: char,
        big_traditional: char,
    ) -> Self {
        Self {
            simplified,
            traditional,
            big_simplified,
            big_traditional,
        }
    }

    /// Forms whose big variants equal the ordinary ones
    const fn plain(simplified: char, traditional: char) -> Self {
        Self::new(simplified, traditional, simplified, traditional)
    }

    /// Form used for the given script
    pub fn render(&self, script: Script) -> char {
        match script {
            Script::Simplified => self.simplified,
            Script::Traditional => self.traditional,
            Script::BigSimplified => self.big_simplified,
            Script::BigTraditional => self.big_traditional,
        }
    }

    /// Whether `ch` is any of the forms
    pub fn contains(&self, ch: char) -> bool {
        ch == self.simplified
            || ch == self.traditional
            || ch == self.big_simplified
            || ch == self.big_traditional
    }
}

/// A digit 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit {
    pub value: u8,
    pub forms: Forms,
    /// Alternate simplified/traditional forms (〇 for zero, 两/兩 for two)
    pub alt: Option<(char, char)>,
}

impl Digit {
    /// Alternate glyph for the script, falling back to the regular form
    ///
    /// 〇 applies in every script; 两 never replaces a formal 贰.
    pub fn render_alt(&self, script: Script) -> char {
        match self.alt {
            Some(_) if self.value == 2 && script.is_big() => self.forms.render(script),
            Some((_, traditional)) if script.is_traditional() => traditional,
            Some((simplified, _)) => simplified,
            None => self.forms.render(script),
        }
    }

    fn matches(&self, ch: char) -> bool {
        self.forms.contains(ch) || self.alt.is_some_and(|(s, t)| ch == s || ch == t)
    }
}

/// A power-of-ten unit (十, 百, …, 亿, 兆, …)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub power: u32,
    /// `None` for synthetic units created while repairing elliptical numerals
    pub forms: Option<Forms>,
}

impl Unit {
    /// A unit that only carries a power and is never rendered
    pub fn synthetic(power: u32) -> Self {
        Self { power, forms: None }
    }

    pub fn is_synthetic(&self) -> bool {
        self.forms.is_none()
    }
}

/// Sign and decimal point symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathKind {
    Positive,
    Negative,
    Point,
}

impl MathKind {
    /// ASCII counterpart of the symbol
    pub fn ascii(&self) -> char {
        match self {
            MathKind::Positive => '+',
            MathKind::Negative => '-',
            MathKind::Point => '.',
        }
    }
}

/// A math symbol with its textual forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathSymbol {
    pub kind: MathKind,
    pub forms: Forms,
}

/// One element of a symbol sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Digit(Digit),
    Unit(Unit),
    Math(MathSymbol),
}

impl Symbol {
    /// Rendered glyph, or `None` for a synthetic unit
    pub fn render(&self, script: Script) -> Option<char> {
        match self {
            Symbol::Digit(digit) => Some(digit.forms.render(script)),
            Symbol::Unit(unit) => unit.forms.map(|forms| forms.render(script)),
            Symbol::Math(math) => Some(math.forms.render(script)),
        }
    }

    pub fn as_digit(&self) -> Option<&Digit> {
        match self {
            Symbol::Digit(digit) => Some(digit),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Symbol::Unit(unit) => Some(unit),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Digit(digit) => write!(f, "{}", digit.value),
            Symbol::Unit(unit) => write!(f, "10^{}", unit.power),
            Symbol::Math(math) => write!(f, "{}", math.kind.ascii()),
        }
    }
}

/// Symbol tables for one numbering variant
#[derive(Debug, Clone)]
pub struct NumberingSystem {
    numbering_type: NumberingType,
    /// Small units followed by large units, ascending power
    units: Vec<Unit>,
    digits: Vec<Digit>,
    positive: MathSymbol,
    negative: MathSymbol,
    point: MathSymbol,
}

impl NumberingSystem {
    /// Build the tables for a numbering variant
    pub fn new(numbering_type: NumberingType) -> Self {
        let small_units = (0..SMALL_UNITS_SIMPLIFIED.len()).map(|i| Unit {
            power: i as u32 + 1,
            forms: Some(Forms::new(
                SMALL_UNITS_SIMPLIFIED[i],
                SMALL_UNITS_TRADITIONAL[i],
                BIG_SMALL_UNITS_SIMPLIFIED[i],
                BIG_SMALL_UNITS_TRADITIONAL[i],
            )),
        });
        let large_units = (0..LARGE_UNITS_SIMPLIFIED.len()).map(|i| Unit {
            power: numbering_type.large_unit_power(i as u32),
            forms: Some(Forms::plain(LARGE_UNITS_SIMPLIFIED[i], LARGE_UNITS_TRADITIONAL[i])),
        });
        let units = small_units.chain(large_units).collect();

        let digits = (0..DIGITS.len())
            .map(|i| Digit {
                value: i as u8,
                forms: Forms::new(
                    DIGITS[i],
                    DIGITS[i],
                    BIG_DIGITS_SIMPLIFIED[i],
                    BIG_DIGITS_TRADITIONAL[i],
                ),
                alt: match i {
                    0 => Some((ZERO_ALT, ZERO_ALT)),
                    2 => Some((TWO_ALT_SIMPLIFIED, TWO_ALT_TRADITIONAL)),
                    _ => None,
                },
            })
            .collect();

        Self {
            numbering_type,
            units,
            digits,
            positive: MathSymbol {
                kind: MathKind::Positive,
                forms: Forms::plain(POSITIVE[0], POSITIVE[1]),
            },
            negative: MathSymbol {
                kind: MathKind::Negative,
                forms: Forms::plain(NEGATIVE[0], NEGATIVE[1]),
            },
            point: MathSymbol {
                kind: MathKind::Point,
                forms: Forms::plain(POINT[0], POINT[1]),
            },
        }
    }

    pub fn numbering_type(&self) -> NumberingType {
        self.numbering_type
    }

    /// Digit with the given value (0-9)
    ///
    /// Values above 9 are clamped to 9; callers only pass decimal digits.
    pub fn digit(&self, value: u8) -> Digit {
        self.digits[usize::from(value.min(9))]
    }

    /// Units in ascending power order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Largest unit whose power is strictly less than `digit_count`
    pub fn largest_unit_below(&self, digit_count: usize) -> Option<Unit> {
        self.units
            .iter()
            .rev()
            .find(|unit| (unit.power as usize) < digit_count)
            .copied()
    }

    pub fn positive(&self) -> MathSymbol {
        self.positive
    }

    pub fn negative(&self) -> MathSymbol {
        self.negative
    }

    pub fn point(&self) -> MathSymbol {
        self.point
    }

    /// Whether `ch` is the decimal point in any script
    pub fn is_point(&self, ch: char) -> bool {
        self.point.forms.contains(ch)
    }

    /// Look a character up among digits, then units, then math symbols
    pub fn lookup(&self, ch: char) -> Option<Symbol> {
        if let Some(digit) = self.digits.iter().find(|d| d.matches(ch)) {
            return Some(Symbol::Digit(*digit));
        }
        if let Some(unit) = self
            .units
            .iter()
            .find(|u| u.forms.is_some_and(|forms| forms.contains(ch)))
        {
            return Some(Symbol::Unit(*unit));
        }
        [self.positive, self.negative, self.point]
            .into_iter()
            .find(|m| m.forms.contains(ch))
            .map(Symbol::Math)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn large_powers(numbering_type: NumberingType) -> Vec<u32> {
        NumberingSystem::new(numbering_type)
            .units()
            .iter()
            .skip(4)
            .map(|u| u.power)
            .collect()
    }

    #[test]
    fn test_small_units_are_shared() {
        for numbering_type in NumberingType::ALL {
            let system = NumberingSystem::new(numbering_type);
            let powers: Vec<u32> = system.units().iter().take(4).map(|u| u.power).collect();
            assert_eq!(powers, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_large_unit_powers() {
        assert_eq!(large_powers(NumberingType::Low), vec![8, 9, 10, 11, 12, 13, 14, 15, 16, 17]);
        assert_eq!(large_powers(NumberingType::Mid), vec![8, 12, 16, 20, 24, 28, 32, 36, 40, 44]);
        assert_eq!(
            large_powers(NumberingType::High),
            vec![8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096]
        );
    }

    #[test]
    fn test_numbering_type_parsing() {
        assert_eq!("low".parse::<NumberingType>().unwrap(), NumberingType::Low);
        assert_eq!("MID".parse::<NumberingType>().unwrap(), NumberingType::Mid);
        assert_eq!(" high ".parse::<NumberingType>().unwrap(), NumberingType::High);

        let err = "ultra".parse::<NumberingType>().unwrap_err();
        assert!(matches!(err, Error::InvalidNumberingType(ref s) if s == "ultra"));
    }

    #[test]
    fn test_lookup_order_and_forms() {
        let system = NumberingSystem::new(NumberingType::Mid);

        assert!(matches!(system.lookup('两'), Some(Symbol::Digit(d)) if d.value == 2));
        assert!(matches!(system.lookup('〇'), Some(Symbol::Digit(d)) if d.value == 0));
        assert!(matches!(system.lookup('貳'), Some(Symbol::Digit(d)) if d.value == 2));
        assert!(matches!(system.lookup('萬'), Some(Symbol::Unit(u)) if u.power == 4));
        assert!(matches!(system.lookup('拾'), Some(Symbol::Unit(u)) if u.power == 1));
        assert!(matches!(system.lookup('兆'), Some(Symbol::Unit(u)) if u.power == 12));
        assert!(matches!(
            system.lookup('負'),
            Some(Symbol::Math(m)) if m.kind == MathKind::Negative
        ));
        assert!(matches!(system.lookup('點'), Some(Symbol::Math(m)) if m.kind == MathKind::Point));
        assert_eq!(system.lookup('个'), None);
    }

    #[test]
    fn test_positive_glyph_resolves_as_unit() {
        // 正 is both the 10^40 unit (mid) and the plus sign; the unit wins
        let system = NumberingSystem::new(NumberingType::Mid);
        assert!(matches!(system.lookup('正'), Some(Symbol::Unit(u)) if u.power == 40));
    }

    #[test]
    fn test_largest_unit_below() {
        let system = NumberingSystem::new(NumberingType::Low);
        assert_eq!(system.largest_unit_below(2).map(|u| u.power), Some(1));
        assert_eq!(system.largest_unit_below(5).map(|u| u.power), Some(4));
        assert_eq!(system.largest_unit_below(8).map(|u| u.power), Some(4));
        assert_eq!(system.largest_unit_below(9).map(|u| u.power), Some(8));
        assert_eq!(system.largest_unit_below(1), None);
    }

    #[test]
    fn test_render_alt() {
        let system = NumberingSystem::new(NumberingType::Low);
        let two = system.digit(2);
        assert_eq!(two.render_alt(Script::Simplified), '两');
        assert_eq!(two.render_alt(Script::Traditional), '兩');
        assert_eq!(two.render_alt(Script::BigSimplified), '贰');
        assert_eq!(system.digit(5).render_alt(Script::Simplified), '五');

        let zero = system.digit(0);
        assert_eq!(zero.render_alt(Script::Simplified), '〇');
        assert_eq!(zero.render_alt(Script::BigSimplified), '〇');
        assert_eq!(zero.render_alt(Script::BigTraditional), '〇');
    }

    #[test]
    fn test_synthetic_unit_does_not_render() {
        let unit = Symbol::Unit(Unit::synthetic(7));
        assert_eq!(unit.render(Script::Simplified), None);
        assert_eq!(unit.to_string(), "10^7");
    }
}
