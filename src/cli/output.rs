//! Descriptor rendering for the CLI

use crate::cli::commands::OutputFormat;
use crate::descriptor::DeploymentDescriptor;
use anyhow::Result;
use std::fmt::Write;

/// Render a descriptor in the requested format.
pub fn render(descriptor: &DeploymentDescriptor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(descriptor)?),
        OutputFormat::Text => Ok(render_text(descriptor)),
    }
}

fn render_text(descriptor: &DeploymentDescriptor) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Family:         {}", descriptor.family);
    let _ = writeln!(out, "Port:           {}", descriptor.port);
    let _ = writeln!(
        out,
        "Runtime:        {} {}{}",
        descriptor.runtime.language,
        descriptor.runtime.version,
        if descriptor.runtime.pinned {
            " (pinned)"
        } else {
            ""
        }
    );
    let _ = writeln!(out, "Object storage: {}", descriptor.object_storage);
    if let Some(entrypoint) = descriptor.template_vars.get("entrypoint") {
        let _ = writeln!(out, "Entrypoint:     {}", entrypoint.as_str().unwrap_or(""));
    }
    if let Some(notes) = &descriptor.notes {
        let _ = writeln!(out, "Notes:          {notes}");
    }
    out
}
