//! Certificate command handlers.

use std::path::Path;

use tabled::Tabled;

use npman_core::{Certificate, CertificateRequest, Manager, Meta};

use crate::cli::{CertificatesArgs, CertificatesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CertificateRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Domains")]
    domains: String,
    #[tabled(rename = "Expires")]
    expires: String,
}

impl From<&Certificate> for CertificateRow {
    fn from(c: &Certificate) -> Self {
        Self {
            id: c.id,
            name: c.nice_name.clone(),
            provider: c.provider.clone(),
            domains: c.domain_names.join(", "),
            expires: util::date_cell(c.expires_on),
        }
    }
}

fn detail(c: &Certificate) -> String {
    [
        format!("ID:       {}", c.id),
        format!("Name:     {}", c.nice_name),
        format!("Provider: {}", c.provider),
        format!("Domains:  {}", c.domain_names.join(", ")),
        format!("Expires:  {}", util::date_cell(c.expires_on)),
        format!("Created:  {}", util::date_cell(c.created_on)),
    ]
    .join("\n")
}

fn read_pem(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(CliError::Io)
}

pub async fn handle(
    manager: &Manager,
    args: CertificatesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CertificatesCommand::List => {
            let certs = manager.list_certificates().await?;
            let out = output::render_list(&global.output, &certs, |x| CertificateRow::from(x), |c| {
                c.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CertificatesCommand::Show { id } => {
            let Some(cert) = manager.get_certificate(id).await? else {
                return Err(not_found(id));
            };
            let out = output::render_single(&global.output, &cert, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CertificatesCommand::Create {
            from_file,
            domains,
            provider,
            nice_name,
        } => {
            let req: CertificateRequest = if let Some(ref path) = from_file {
                util::read_request(path)?
            } else {
                CertificateRequest {
                    provider,
                    nice_name: nice_name.unwrap_or_else(|| domains.join(", ")),
                    domain_names: domains,
                    meta: Meta::new(),
                }
            };

            let cert = manager.create_certificate(&req).await?;
            if !global.quiet {
                eprintln!("Certificate {} created", cert.id);
            }
            Ok(())
        }

        CertificatesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete certificate {id}?"), global.yes)? {
                return Ok(());
            }
            manager.delete_certificate(id).await?;
            if !global.quiet {
                eprintln!("Certificate {id} deleted");
            }
            Ok(())
        }

        CertificatesCommand::Upload {
            id,
            certificate,
            key,
        } => {
            let cert_pem = read_pem(&certificate)?;
            let key_pem = read_pem(&key)?;
            manager.upload_certificate(id, cert_pem, key_pem).await?;
            if !global.quiet {
                eprintln!("Certificate {id} uploaded");
            }
            Ok(())
        }

        CertificatesCommand::Validate { certificate, key } => {
            let cert_pem = read_pem(&certificate)?;
            let key_pem = read_pem(&key)?;
            let report = manager.validate_certificate(cert_pem, key_pem).await?;
            let out = output::render_single(&global.output, &report, |r| r.to_string(), |_| {
                "valid".into()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

fn not_found(id: u64) -> CliError {
    CliError::NotFound {
        resource: "Certificate".into(),
        identifier: id.to_string(),
        list_command: "certificates list".into(),
    }
}
