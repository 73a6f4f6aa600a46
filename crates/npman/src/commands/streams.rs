//! Stream command handlers.

use tabled::Tabled;

use npman_core::{Manager, Stream, StreamRequest};

use crate::cli::{GlobalOpts, StreamsArgs, StreamsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct StreamRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Incoming")]
    incoming: u16,
    #[tabled(rename = "Upstream")]
    upstream: String,
    #[tabled(rename = "Protocols")]
    protocols: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

fn protocols(s: &Stream) -> String {
    match (s.tcp_forwarding, s.udp_forwarding) {
        (true, true) => "tcp+udp".into(),
        (true, false) => "tcp".into(),
        (false, true) => "udp".into(),
        (false, false) => "-".into(),
    }
}

impl From<&Stream> for StreamRow {
    fn from(s: &Stream) -> Self {
        Self {
            id: s.id,
            incoming: s.incoming_port,
            upstream: format!("{}:{}", s.forwarding_host, s.forwarding_port),
            protocols: protocols(s),
            enabled: util::yes_no(s.enabled),
        }
    }
}

fn detail(s: &Stream) -> String {
    [
        format!("ID:        {}", s.id),
        format!("Incoming:  {}", s.incoming_port),
        format!("Upstream:  {}:{}", s.forwarding_host, s.forwarding_port),
        format!("Protocols: {}", protocols(s)),
        format!("Cert:      {}", util::cert_cell(s.certificate)),
        format!("Enabled:   {}", util::yes_no(s.enabled)),
        format!("Created:   {}", util::date_cell(s.created_on)),
    ]
    .join("\n")
}

pub async fn handle(
    manager: &Manager,
    args: StreamsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        StreamsCommand::List => {
            let streams = manager.list_streams().await?;
            let out = output::render_list(&global.output, &streams, |x| StreamRow::from(x), |s| {
                s.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StreamsCommand::Show { id } => {
            let Some(stream) = manager.get_stream(id).await? else {
                return Err(not_found(id));
            };
            let out = output::render_single(&global.output, &stream, detail, |s| s.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StreamsCommand::Create { from_file } => {
            let req: StreamRequest = util::read_request(&from_file)?;
            let stream = manager.create_stream(&req).await?;
            if !global.quiet {
                eprintln!("Stream {} created", stream.id);
            }
            Ok(())
        }

        StreamsCommand::Update { id, from_file } => {
            let req: StreamRequest = util::read_request(&from_file)?;
            manager.update_stream(id, &req).await?;
            if !global.quiet {
                eprintln!("Stream {id} updated");
            }
            Ok(())
        }

        StreamsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete stream {id}?"), global.yes)? {
                return Ok(());
            }
            manager.delete_stream(id).await?;
            if !global.quiet {
                eprintln!("Stream {id} deleted");
            }
            Ok(())
        }

        StreamsCommand::Enable { id } => {
            manager.set_stream_enabled(id, true).await?;
            if !global.quiet {
                eprintln!("Stream {id} enabled");
            }
            Ok(())
        }

        StreamsCommand::Disable { id } => {
            manager.set_stream_enabled(id, false).await?;
            if !global.quiet {
                eprintln!("Stream {id} disabled");
            }
            Ok(())
        }
    }
}

fn not_found(id: u64) -> CliError {
    CliError::NotFound {
        resource: "Stream".into(),
        identifier: id.to_string(),
        list_command: "streams list".into(),
    }
}
