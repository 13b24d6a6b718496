pub mod json;
pub mod plain;

use color_eyre::Result;

use crate::analyzer::Output;
use crate::config::{Config, OutputFormat};

pub fn call(config: &Config, output: &Output) -> Result<()> {
    let formatter = match config.output_format {
        OutputFormat::Plain => self::plain::call,
        OutputFormat::Json => self::json::call,
    };

    formatter(output)
}
