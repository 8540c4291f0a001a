//! Conversion configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::numeral::NumberingType;

/// Immutable configuration threaded through every conversion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Scale of units from 亿 upward
    pub numbering_type: NumberingType,
    /// Render formal (financial) glyphs: 壹贰叁, 拾佰仟
    pub big: bool,
    /// Render traditional glyphs: 萬, 億, 點
    pub traditional: bool,
    /// Render zero as 〇
    pub alt_zero: bool,
    /// Render two as 两 before units other than 十
    pub alt_two: bool,
    /// Keep 零 for skipped positions such as 一千零一
    pub use_zeros: bool,
    /// Read magnitudes with units; when false numbers are read digit by digit
    pub use_units: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            numbering_type: NumberingType::Low,
            big: false,
            traditional: false,
            alt_zero: false,
            alt_two: false,
            use_zeros: true,
            use_units: true,
        }
    }
}

impl ConversionConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Copy of this configuration with digit-by-digit reading
    pub fn without_units(self) -> Self {
        Self {
            use_units: false,
            ..self
        }
    }
}

/// Fluent builder for [`ConversionConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: ConversionConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numbering type by name (`low`, `mid` or `high`)
    pub fn numbering_type(mut self, name: &str) -> Result<Self> {
        self.config.numbering_type = name.parse()?;
        Ok(self)
    }

    /// Set the numbering type
    pub fn numbering(mut self, numbering_type: NumberingType) -> Self {
        self.config.numbering_type = numbering_type;
        self
    }

    pub fn big(mut self, big: bool) -> Self {
        self.config.big = big;
        self
    }

    pub fn traditional(mut self, traditional: bool) -> Self {
        self.config.traditional = traditional;
        self
    }

    pub fn alt_zero(mut self, alt_zero: bool) -> Self {
        self.config.alt_zero = alt_zero;
        self
    }

    pub fn alt_two(mut self, alt_two: bool) -> Self {
        self.config.alt_two = alt_two;
        self
    }

    pub fn use_zeros(mut self, use_zeros: bool) -> Self {
        self.config.use_zeros = use_zeros;
        self
    }

    pub fn use_units(mut self, use_units: bool) -> Self {
        self.config.use_units = use_units;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConversionConfig {
        self.config
    }
}
