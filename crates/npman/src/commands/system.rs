//! System command handlers.

use owo_colors::OwoColorize;

use npman_core::Manager;

use crate::cli::{GlobalOpts, OutputFormat, SystemArgs, SystemCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    manager: &Manager,
    args: SystemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SystemCommand::Health => {
            let status = manager.health().await?;

            if matches!(global.output, OutputFormat::Table) {
                let state = if status.status == "OK" {
                    status.status.green().to_string()
                } else {
                    status.status.red().to_string()
                };
                let version = status.version.as_deref().unwrap_or("unknown");
                output::print_output(
                    &format!("Status:  {state}\nVersion: {version}"),
                    global.quiet,
                );
            } else {
                let body = serde_json::json!({
                    "status": status.status.clone(),
                    "version": status.version.clone(),
                });
                let out = output::render_single(
                    &global.output,
                    &body,
                    |b| b.to_string(),
                    |_| status.status.clone(),
                );
                output::print_output(&out, global.quiet);
            }
            Ok(())
        }
    }
}
