//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the conversion flags and unit symbols");
        println!("2. Validate your configuration:");
        println!("   cntn validate -c {}", self.output.display());
        println!("3. Use it for normalization:");
        println!("   cntn normalize -i input.txt --config {}", self.output.display());

        Ok(())
    }

    /// Template configuration content
    fn template() -> &'static str {
        r#"# cntn configuration

[conversion]
# Scale of units from 亿 upward: "low", "mid" or "high"
numbering_type = "low"
# Formal (financial) glyphs: 壹贰叁, 拾佰仟
big = false
# Traditional glyphs: 萬, 億, 點
traditional = false
# Write zero as 〇
alt_zero = false
# Write two as 两 before 百/千/万
alt_two = false
# Keep 零 for skipped positions (一千零一)
use_zeros = true
# Read magnitudes with units; false reads digit by digit
use_units = true

# Unit symbols merged over the built-in table
# (% -> 百分之; CM, KM, M, KG, G -> 厘米, 公里, 米, 公斤, 克).
# Symbols are matched case-insensitively.

# Read before the number: 5‰ -> 千分之五
[units.pre_units]
# "‰" = "千分之"

# Read after the number: 3MM -> 三毫米
[units.post_units]
# MM = "毫米"
# ML = "毫升"
"#
    }
}
