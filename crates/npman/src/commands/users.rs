//! User account command handlers.

use secrecy::SecretString;
use tabled::Tabled;

use npman_core::{Manager, Permissions, User, UserRequest};

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Roles")]
    roles: String,
    #[tabled(rename = "Disabled")]
    disabled: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            roles: u.roles.join(", "),
            disabled: util::yes_no(u.is_disabled),
        }
    }
}

fn detail(u: &User) -> String {
    let mut lines = vec![
        format!("ID:       {}", u.id),
        format!("Name:     {}", u.name),
        format!("Nickname: {}", u.nickname),
        format!("Email:    {}", u.email),
        format!("Roles:    {}", u.roles.join(", ")),
        format!("Disabled: {}", util::yes_no(u.is_disabled)),
        format!("Created:  {}", util::date_cell(u.created_on)),
    ];
    if let Some(ref p) = u.permissions {
        lines.push(format!("Visibility:   {}", p.visibility));
        lines.push(format!("Proxy hosts:  {}", p.proxy_hosts));
        lines.push(format!("Redirections: {}", p.redirection_hosts));
        lines.push(format!("404 hosts:    {}", p.dead_hosts));
        lines.push(format!("Streams:      {}", p.streams));
        lines.push(format!("Access lists: {}", p.access_lists));
        lines.push(format!("Certificates: {}", p.certificates));
    }
    lines.join("\n")
}

pub async fn handle(
    manager: &Manager,
    args: UsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        UsersCommand::List => {
            let users = manager.list_users().await?;
            let out =
                output::render_list(&global.output, &users, |x| UserRow::from(x), |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Show { id } => {
            let Some(user) = manager.get_user(id).await? else {
                return Err(not_found(id));
            };
            let out = output::render_single(&global.output, &user, detail, |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Me => {
            let user = manager.current_user().await?;
            let out = output::render_single(&global.output, &user, detail, |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create { from_file } => {
            let req: UserRequest = util::read_request(&from_file)?;
            let user = manager.create_user(&req).await?;
            if !global.quiet {
                eprintln!("User {} created", user.id);
            }
            Ok(())
        }

        UsersCommand::Update { id, from_file } => {
            let req: UserRequest = util::read_request(&from_file)?;
            manager.update_user(id, &req).await?;
            if !global.quiet {
                eprintln!("User {id} updated");
            }
            Ok(())
        }

        UsersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete user {id}?"), global.yes)? {
                return Ok(());
            }
            manager.delete_user(id).await?;
            if !global.quiet {
                eprintln!("User {id} deleted");
            }
            Ok(())
        }

        UsersCommand::SetPassword { id } => {
            let secret = read_password(global)?;
            manager.set_user_password(id, &secret).await?;
            if !global.quiet {
                eprintln!("Password changed for user {id}");
            }
            Ok(())
        }

        UsersCommand::SetPermissions { id, from_file } => {
            let permissions: Permissions = util::read_request(&from_file)?;
            manager.set_user_permissions(id, &permissions).await?;
            if !global.quiet {
                eprintln!("Permissions updated for user {id}");
            }
            Ok(())
        }
    }
}

/// The new password: `--password-env` when set, otherwise an
/// interactive prompt.
fn read_password(global: &GlobalOpts) -> Result<SecretString, CliError> {
    if let Some(ref env_name) = global.password_env {
        let value = std::env::var(env_name).map_err(|_| CliError::Validation {
            field: "password-env".into(),
            reason: format!("environment variable '{env_name}' is not set"),
        })?;
        return Ok(SecretString::from(value));
    }
    let value = rpassword::prompt_password("New password: ").map_err(CliError::Io)?;
    Ok(SecretString::from(value))
}

fn not_found(id: u64) -> CliError {
    CliError::NotFound {
        resource: "User".into(),
        identifier: id.to_string(),
        list_command: "users list".into(),
    }
}
