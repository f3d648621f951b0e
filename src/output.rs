use crate::config::OutputFormat;
use crate::models::WindowButtonLayout;
use anyhow::Result;

/// Представление раскладки для вывода в stdout
pub fn render_layout(layout: &WindowButtonLayout, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(layout.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(layout)?),
    }
}
