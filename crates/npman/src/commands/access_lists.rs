//! Access list command handlers.

use tabled::Tabled;

use npman_core::{AccessList, AccessListRequest, Manager};

use crate::cli::{AccessListsArgs, AccessListsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct AccessListRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Auth entries")]
    items: usize,
    #[tabled(rename = "IP rules")]
    clients: usize,
    #[tabled(rename = "Satisfy")]
    satisfy: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

impl From<&AccessList> for AccessListRow {
    fn from(l: &AccessList) -> Self {
        Self {
            id: l.id,
            name: l.name.clone(),
            items: l.items.len(),
            clients: l.clients.len(),
            satisfy: if l.satisfy_any { "any" } else { "all" }.into(),
            enabled: util::yes_no(l.enabled),
        }
    }
}

fn detail(l: &AccessList) -> String {
    let mut lines = vec![
        format!("ID:        {}", l.id),
        format!("Name:      {}", l.name),
        format!("Satisfy:   {}", if l.satisfy_any { "any" } else { "all" }),
        format!("Pass auth: {}", util::yes_no(l.pass_auth)),
        format!("Used by:   {} proxy host(s)", l.proxy_host_count),
        format!("Enabled:   {}", util::yes_no(l.enabled)),
    ];
    for item in &l.items {
        let secret = if item.password.is_some() { "known" } else { "unknown" };
        lines.push(format!("Auth:      {} (secret {secret})", item.username));
    }
    for rule in &l.clients {
        lines.push(format!("Rule:      {} {}", rule.directive, rule.address));
    }
    lines.join("\n")
}

pub async fn handle(
    manager: &Manager,
    args: AccessListsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AccessListsCommand::List => {
            let lists = manager.list_access_lists().await?;
            let out = output::render_list(&global.output, &lists, |x| AccessListRow::from(x), |l| {
                l.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AccessListsCommand::Show { id } => {
            let Some(list) = manager.get_access_list(id).await? else {
                return Err(not_found(id));
            };
            let out = output::render_single(&global.output, &list, detail, |l| l.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AccessListsCommand::Create { from_file } => {
            let req: AccessListRequest = util::read_request(&from_file)?;
            let list = manager.create_access_list(&req).await?;
            if !global.quiet {
                eprintln!("Access list {} created", list.id);
            }
            Ok(())
        }

        AccessListsCommand::Update { id, from_file } => {
            let req: AccessListRequest = util::read_request(&from_file)?;
            manager.update_access_list(id, &req).await?;
            if !global.quiet {
                eprintln!("Access list {id} updated");
            }
            Ok(())
        }

        AccessListsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete access list {id}?"), global.yes)? {
                return Ok(());
            }
            manager.delete_access_list(id).await?;
            if !global.quiet {
                eprintln!("Access list {id} deleted");
            }
            Ok(())
        }

        AccessListsCommand::Enable { id } => {
            manager.set_access_list_enabled(id, true).await?;
            if !global.quiet {
                eprintln!("Access list {id} enabled");
            }
            Ok(())
        }

        AccessListsCommand::Disable { id } => {
            manager.set_access_list_enabled(id, false).await?;
            if !global.quiet {
                eprintln!("Access list {id} disabled");
            }
            Ok(())
        }
    }
}

fn not_found(id: u64) -> CliError {
    CliError::NotFound {
        resource: "Access List".into(),
        identifier: id.to_string(),
        list_command: "access-lists list".into(),
    }
}
