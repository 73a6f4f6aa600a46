//! Proxy host command handlers.

use tabled::Tabled;

use npman_core::{Manager, Meta, ProxyHost, ProxyHostRequest};

use crate::cli::{GlobalOpts, ProxyHostsArgs, ProxyHostsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProxyHostRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Domains")]
    domains: String,
    #[tabled(rename = "Upstream")]
    upstream: String,
    #[tabled(rename = "Cert")]
    cert: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

impl From<&ProxyHost> for ProxyHostRow {
    fn from(h: &ProxyHost) -> Self {
        Self {
            id: h.id,
            domains: h.domain_names.join(", "),
            upstream: format!("{}://{}:{}", h.forward_scheme, h.forward_host, h.forward_port),
            cert: util::cert_cell(h.certificate),
            enabled: util::yes_no(h.enabled),
        }
    }
}

fn detail(h: &ProxyHost) -> String {
    [
        format!("ID:        {}", h.id),
        format!("Domains:   {}", h.domain_names.join(", ")),
        format!(
            "Upstream:  {}://{}:{}",
            h.forward_scheme, h.forward_host, h.forward_port
        ),
        format!("Cert:      {}", util::cert_cell(h.certificate)),
        format!("SSL forced: {}", util::yes_no(h.ssl_forced)),
        format!("Websockets: {}", util::yes_no(h.allow_websocket_upgrade)),
        format!("Caching:   {}", util::yes_no(h.caching_enabled)),
        format!("Locations: {}", h.locations.len()),
        format!("Enabled:   {}", util::yes_no(h.enabled)),
        format!("Created:   {}", util::date_cell(h.created_on)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    manager: &Manager,
    args: ProxyHostsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProxyHostsCommand::List => {
            let hosts = manager.list_proxy_hosts().await?;
            let out = output::render_list(&global.output, &hosts, |x| ProxyHostRow::from(x), |h| {
                h.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProxyHostsCommand::Show { id } => {
            let Some(host) = manager.get_proxy_host(id).await? else {
                return Err(not_found(id));
            };
            let out = output::render_single(&global.output, &host, detail, |h| h.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProxyHostsCommand::Create {
            from_file,
            domains,
            forward_host,
            forward_port,
            forward_scheme,
            disabled,
        } => {
            let req: ProxyHostRequest = if let Some(ref path) = from_file {
                util::read_request(path)?
            } else {
                inline_request(domains, forward_host, forward_port, forward_scheme, disabled)?
            };

            let host = manager.create_proxy_host(&req).await?;
            if !global.quiet {
                eprintln!("Proxy host {} created", host.id);
            }
            Ok(())
        }

        ProxyHostsCommand::Update { id, from_file } => {
            let req: ProxyHostRequest = util::read_request(&from_file)?;
            manager.update_proxy_host(id, &req).await?;
            if !global.quiet {
                eprintln!("Proxy host {id} updated");
            }
            Ok(())
        }

        ProxyHostsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete proxy host {id}?"), global.yes)? {
                return Ok(());
            }
            manager.delete_proxy_host(id).await?;
            if !global.quiet {
                eprintln!("Proxy host {id} deleted");
            }
            Ok(())
        }

        ProxyHostsCommand::Enable { id } => {
            manager.set_proxy_host_enabled(id, true).await?;
            if !global.quiet {
                eprintln!("Proxy host {id} enabled");
            }
            Ok(())
        }

        ProxyHostsCommand::Disable { id } => {
            manager.set_proxy_host_enabled(id, false).await?;
            if !global.quiet {
                eprintln!("Proxy host {id} disabled");
            }
            Ok(())
        }
    }
}

fn inline_request(
    domains: Vec<String>,
    forward_host: Option<String>,
    forward_port: Option<u16>,
    forward_scheme: String,
    disabled: bool,
) -> Result<ProxyHostRequest, CliError> {
    if domains.is_empty() {
        return Err(missing_flag("domain"));
    }
    let forward_host = forward_host.ok_or_else(|| missing_flag("forward-host"))?;
    let forward_port = forward_port.ok_or_else(|| missing_flag("forward-port"))?;

    Ok(ProxyHostRequest {
        domain_names: domains,
        forward_scheme,
        forward_host,
        forward_port,
        certificate: npman_core::CertificateRef::None,
        ssl_forced: false,
        hsts_enabled: false,
        hsts_subdomains: false,
        http2_support: false,
        block_exploits: false,
        caching_enabled: false,
        allow_websocket_upgrade: false,
        access_list_id: None,
        advanced_config: String::new(),
        enabled: !disabled,
        locations: Vec::new(),
        meta: Meta::new(),
    })
}

fn missing_flag(flag: &str) -> CliError {
    CliError::Validation {
        field: flag.into(),
        reason: "required unless --from-file is used".into(),
    }
}

fn not_found(id: u64) -> CliError {
    CliError::NotFound {
        resource: "Proxy Host".into(),
        identifier: id.to_string(),
        list_command: "proxy-hosts list".into(),
    }
}
