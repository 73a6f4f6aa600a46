//! Command dispatch: bridges CLI args -> Manager calls -> output
//! formatting.

pub mod access_lists;
pub mod certificates;
pub mod config_cmd;
pub mod dead_hosts;
pub mod proxy_hosts;
pub mod redirection_hosts;
pub mod settings;
pub mod streams;
pub mod system;
pub mod users;
pub mod util;

use npman_core::Manager;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an instance-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    manager: &Manager,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::ProxyHosts(args) => proxy_hosts::handle(manager, args, global).await,
        Command::RedirectionHosts(args) => redirection_hosts::handle(manager, args, global).await,
        Command::DeadHosts(args) => dead_hosts::handle(manager, args, global).await,
        Command::Streams(args) => streams::handle(manager, args, global).await,
        Command::AccessLists(args) => access_lists::handle(manager, args, global).await,
        Command::Certificates(args) => certificates::handle(manager, args, global).await,
        Command::Users(args) => users::handle(manager, args, global).await,
        Command::Settings(args) => settings::handle(manager, args, global).await,
        Command::System(args) => system::handle(manager, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
