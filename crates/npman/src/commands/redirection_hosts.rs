//! Redirection host command handlers.

use tabled::Tabled;

use npman_core::{Manager, RedirectionHost, RedirectionHostRequest};

use crate::cli::{GlobalOpts, RedirectionHostsArgs, RedirectionHostsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RedirectionHostRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Domains")]
    domains: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Code")]
    code: u16,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

impl From<&RedirectionHost> for RedirectionHostRow {
    fn from(h: &RedirectionHost) -> Self {
        Self {
            id: h.id,
            domains: h.domain_names.join(", "),
            target: format!("{}://{}", h.forward_scheme, h.forward_domain_name),
            code: h.forward_http_code,
            enabled: util::yes_no(h.enabled),
        }
    }
}

fn detail(h: &RedirectionHost) -> String {
    [
        format!("ID:       {}", h.id),
        format!("Domains:  {}", h.domain_names.join(", ")),
        format!("Target:   {}://{}", h.forward_scheme, h.forward_domain_name),
        format!("Code:     {}", h.forward_http_code),
        format!("Preserve path: {}", util::yes_no(h.preserve_path)),
        format!("Cert:     {}", util::cert_cell(h.certificate)),
        format!("Enabled:  {}", util::yes_no(h.enabled)),
        format!("Created:  {}", util::date_cell(h.created_on)),
    ]
    .join("\n")
}

pub async fn handle(
    manager: &Manager,
    args: RedirectionHostsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RedirectionHostsCommand::List => {
            let hosts = manager.list_redirection_hosts().await?;
            let out = output::render_list(&global.output, &hosts, |x| RedirectionHostRow::from(x), |h| {
                h.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RedirectionHostsCommand::Show { id } => {
            let Some(host) = manager.get_redirection_host(id).await? else {
                return Err(not_found(id));
            };
            let out = output::render_single(&global.output, &host, detail, |h| h.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RedirectionHostsCommand::Create { from_file } => {
            let req: RedirectionHostRequest = util::read_request(&from_file)?;
            let host = manager.create_redirection_host(&req).await?;
            if !global.quiet {
                eprintln!("Redirection host {} created", host.id);
            }
            Ok(())
        }

        RedirectionHostsCommand::Update { id, from_file } => {
            let req: RedirectionHostRequest = util::read_request(&from_file)?;
            manager.update_redirection_host(id, &req).await?;
            if !global.quiet {
                eprintln!("Redirection host {id} updated");
            }
            Ok(())
        }

        RedirectionHostsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete redirection host {id}?"), global.yes)? {
                return Ok(());
            }
            manager.delete_redirection_host(id).await?;
            if !global.quiet {
                eprintln!("Redirection host {id} deleted");
            }
            Ok(())
        }

        RedirectionHostsCommand::Enable { id } => {
            manager.set_redirection_host_enabled(id, true).await?;
            if !global.quiet {
                eprintln!("Redirection host {id} enabled");
            }
            Ok(())
        }

        RedirectionHostsCommand::Disable { id } => {
            manager.set_redirection_host_enabled(id, false).await?;
            if !global.quiet {
                eprintln!("Redirection host {id} disabled");
            }
            Ok(())
        }
    }
}

fn not_found(id: u64) -> CliError {
    CliError::NotFound {
        resource: "Redirection Host".into(),
        identifier: id.to_string(),
        list_command: "redirection-hosts list".into(),
    }
}
