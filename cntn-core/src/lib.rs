//! Chinese numeral conversion and number normalization for mixed text
//!
//! The crate has two layers:
//! - **Numeral engine** ([`numeral`]): Arabic numeral strings to Chinese
//!   readings and back, across the low/mid/high numbering systems and the
//!   simplified, traditional and formal (大写) scripts
//! - **Normalizer** ([`normalizer`]): finds numbers in free text and decides
//!   how each is spoken (with units, digit by digit, or by magnitude)
//!
//! # Example
//!
//! ```rust
//! use cntn_core::{chinese_to_number, normalize, number_to_chinese};
//! use cntn_core::{ConversionConfig, Number, NumberingType};
//!
//! let config = ConversionConfig::default();
//! assert_eq!(number_to_chinese("10403", &config).unwrap(), "一万零四百零三");
//!
//! let value = chinese_to_number("两千零一", NumberingType::Mid).unwrap();
//! assert_eq!(value, Number::integer(2001));
//!
//! let text = normalize("我觉得有0.1%的可能性", &config).unwrap();
//! assert_eq!(text, "我觉得有百分之零点一的可能性");
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod numeral;

pub use config::{ConfigBuilder, ConversionConfig};
pub use error::{Error, Result};
pub use normalizer::{normalize, Normalizer, Run, RunKind, UnitRole, UnitTable};
pub use numeral::{chinese_to_number, number_to_chinese, Number, NumberingType};
