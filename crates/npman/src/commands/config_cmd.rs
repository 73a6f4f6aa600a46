//! Config command handlers: init, path, show.
//!
//! These never touch the network; they manage the local TOML profile
//! file and keyring entries.

use dialoguer::{Confirm, Input};

use npman_config::Profile;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", npman_config::config_path().display());
            Ok(())
        }

        ConfigCommand::Show => {
            let mut cfg = npman_config::load_config_or_default();
            for profile in cfg.profiles.values_mut() {
                if profile.password.is_some() {
                    profile.password = Some("<redacted>".into());
                }
            }
            let rendered = toml::to_string_pretty(&cfg)
                .map_err(npman_config::ConfigError::Serialization)?;
            print!("{rendered}");
            Ok(())
        }

        ConfigCommand::Init => init(global),
    }
}

/// Interactively create or update a profile.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = npman_config::load_config_or_default();

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default(
            global
                .profile
                .clone()
                .or_else(|| cfg.default_profile.clone())
                .unwrap_or_else(|| "default".into()),
        )
        .interact_text()
        .map_err(prompt_err)?;

    let url: String = Input::new()
        .with_prompt("Instance URL (e.g. http://192.168.1.2:81)")
        .default(global.url.clone().unwrap_or_default())
        .interact_text()
        .map_err(prompt_err)?;

    let identity: String = Input::new()
        .with_prompt("Identity (email address)")
        .default(global.identity.clone().unwrap_or_default())
        .interact_text()
        .map_err(prompt_err)?;

    let password = rpassword::prompt_password("Password: ").map_err(CliError::Io)?;

    let use_keyring = Confirm::new()
        .with_prompt("Store the password in the system keyring?")
        .default(true)
        .interact()
        .map_err(prompt_err)?;

    let stored_password = if use_keyring {
        npman_config::store_password(&profile_name, &password)?;
        None
    } else {
        Some(password)
    };

    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            url,
            identity: Some(identity),
            password: stored_password,
            password_env: None,
            ca_cert: None,
            insecure: global.insecure.then_some(true),
            timeout: global.timeout,
        },
    );
    if cfg.default_profile.is_none() {
        cfg.default_profile = Some(profile_name.clone());
    }

    npman_config::save_config(&cfg)?;
    if !global.quiet {
        eprintln!(
            "Profile '{profile_name}' saved to {}",
            npman_config::config_path().display()
        );
    }
    Ok(())
}

fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
