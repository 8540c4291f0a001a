//! Single-pass classifier splitting mixed text into typed runs

use serde::Serialize;

use crate::normalizer::units::UnitTable;

/// Class of a maximal run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    /// CJK unified ideographs
    Cjk,
    /// Uppercase ASCII letters
    Latin,
    /// ASCII decimal number, `digits` or `digits.digits`
    Number,
    /// A symbol from the unit table that is not a letter run (e.g. `%`)
    UnitSymbol,
    /// Anything else, passed through verbatim
    Literal,
}

/// A typed slice of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub kind: RunKind,
    pub text: String,
}

impl Run {
    pub fn new(kind: RunKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whether this is a number run without a decimal point
    pub fn is_integer(&self) -> bool {
        self.kind == RunKind::Number && !self.text.contains('.')
    }
}

/// Splits uppercased text into runs
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    units: &'a UnitTable,
}

impl<'a> Tokenizer<'a> {
    pub fn new(units: &'a UnitTable) -> Self {
        Self { units }
    }

    /// Classify `text` into runs
    ///
    /// Concatenating the run texts gives back `text` exactly.
    pub fn tokenize(&self, text: &str) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut literal_start: Option<usize> = None;
        let mut pos = 0;

        while let Some(ch) = text[pos..].chars().next() {
            let rest = &text[pos..];
            let matched = if is_cjk(ch) {
                Some((RunKind::Cjk, span_while(rest, is_cjk)))
            } else if ch.is_ascii_uppercase() {
                Some((RunKind::Latin, span_while(rest, |c| c.is_ascii_uppercase())))
            } else if ch.is_ascii_digit() {
                Some((RunKind::Number, number_len(rest)))
            } else {
                self.units
                    .symbol_prefix(rest)
                    .map(|symbol| (RunKind::UnitSymbol, symbol.len()))
            };

            match matched {
                Some((kind, len)) => {
                    if let Some(start) = literal_start.take() {
                        runs.push(Run::new(RunKind::Literal, &text[start..pos]));
                    }
                    runs.push(Run::new(kind, &rest[..len]));
                    pos += len;
                }
                None => {
                    literal_start.get_or_insert(pos);
                    pos += ch.len_utf8();
                }
            }
        }

        if let Some(start) = literal_start {
            runs.push(Run::new(RunKind::Literal, &text[start..]));
        }

        runs
    }
}

/// CJK unified ideographs block
pub fn is_cjk(ch: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&ch)
}

fn span_while(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| i)
}

/// Length of `digits` or `digits.digits` at the start of `text`
fn number_len(text: &str) -> usize {
    let integer = span_while(text, |c| c.is_ascii_digit());
    let rest = &text[integer..];
    match rest.strip_prefix('.') {
        Some(after) if after.starts_with(|c: char| c.is_ascii_digit()) => {
            integer + 1 + span_while(after, |c| c.is_ascii_digit())
        }
        _ => integer,
    }
}
