//! Dead host (404 host) command handlers.

use tabled::Tabled;

use npman_core::{DeadHost, DeadHostRequest, Manager};

use crate::cli::{DeadHostsArgs, DeadHostsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct DeadHostRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Domains")]
    domains: String,
    #[tabled(rename = "Cert")]
    cert: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

impl From<&DeadHost> for DeadHostRow {
    fn from(h: &DeadHost) -> Self {
        Self {
            id: h.id,
            domains: h.domain_names.join(", "),
            cert: util::cert_cell(h.certificate),
            enabled: util::yes_no(h.enabled),
        }
    }
}

fn detail(h: &DeadHost) -> String {
    [
        format!("ID:      {}", h.id),
        format!("Domains: {}", h.domain_names.join(", ")),
        format!("Cert:    {}", util::cert_cell(h.certificate)),
        format!("Enabled: {}", util::yes_no(h.enabled)),
        format!("Created: {}", util::date_cell(h.created_on)),
    ]
    .join("\n")
}

pub async fn handle(
    manager: &Manager,
    args: DeadHostsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DeadHostsCommand::List => {
            let hosts = manager.list_dead_hosts().await?;
            let out = output::render_list(&global.output, &hosts, |x| DeadHostRow::from(x), |h| {
                h.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DeadHostsCommand::Show { id } => {
            let Some(host) = manager.get_dead_host(id).await? else {
                return Err(not_found(id));
            };
            let out = output::render_single(&global.output, &host, detail, |h| h.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DeadHostsCommand::Create { from_file } => {
            let req: DeadHostRequest = util::read_request(&from_file)?;
            let host = manager.create_dead_host(&req).await?;
            if !global.quiet {
                eprintln!("404 host {} created", host.id);
            }
            Ok(())
        }

        DeadHostsCommand::Update { id, from_file } => {
            let req: DeadHostRequest = util::read_request(&from_file)?;
            manager.update_dead_host(id, &req).await?;
            if !global.quiet {
                eprintln!("404 host {id} updated");
            }
            Ok(())
        }

        DeadHostsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete 404 host {id}?"), global.yes)? {
                return Ok(());
            }
            manager.delete_dead_host(id).await?;
            if !global.quiet {
                eprintln!("404 host {id} deleted");
            }
            Ok(())
        }

        DeadHostsCommand::Enable { id } => {
            manager.set_dead_host_enabled(id, true).await?;
            if !global.quiet {
                eprintln!("404 host {id} enabled");
            }
            Ok(())
        }

        DeadHostsCommand::Disable { id } => {
            manager.set_dead_host_enabled(id, false).await?;
            if !global.quiet {
                eprintln!("404 host {id} disabled");
            }
            Ok(())
        }
    }
}

fn not_found(id: u64) -> CliError {
    CliError::NotFound {
        resource: "404 Host".into(),
        identifier: id.to_string(),
        list_command: "dead-hosts list".into(),
    }
}
