//! Settings command handlers.

use tabled::Tabled;

use npman_core::{Manager, Setting, SettingRequest};

use crate::cli::{GlobalOpts, SettingsArgs, SettingsCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&Setting> for SettingRow {
    fn from(s: &Setting) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            value: s.value.to_string(),
        }
    }
}

fn detail(s: &Setting) -> String {
    [
        format!("ID:          {}", s.id),
        format!("Name:        {}", s.name),
        format!("Description: {}", s.description),
        format!("Value:       {}", s.value),
    ]
    .join("\n")
}

pub async fn handle(
    manager: &Manager,
    args: SettingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SettingsCommand::List => {
            let settings = manager.list_settings().await?;
            let out =
                output::render_list(&global.output, &settings, |x| SettingRow::from(x), |s| s.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SettingsCommand::Show { id } => {
            let Some(setting) = manager.get_setting(&id).await? else {
                return Err(not_found(&id));
            };
            let out = output::render_single(&global.output, &setting, detail, |s| s.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SettingsCommand::Set { id, value } => {
            // Accept raw JSON; a bare word becomes a JSON string.
            let value = serde_json::from_str(&value)
                .unwrap_or_else(|_| serde_json::Value::String(value));
            let req = SettingRequest {
                value,
                meta: npman_core::Meta::new(),
            };
            manager.update_setting(&id, &req).await?;
            if !global.quiet {
                eprintln!("Setting '{id}' updated");
            }
            Ok(())
        }
    }
}

fn not_found(id: &str) -> CliError {
    CliError::NotFound {
        resource: "Setting".into(),
        identifier: id.into(),
        list_command: "settings list".into(),
    }
}
