use serde_json::Value;

use crate::cli::OutputFormat;

/// Print `data` as pretty JSON, or the text lines, depending on the format
pub fn output(output_format: OutputFormat, text: &[String], data: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Text => {
            for line in text {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
