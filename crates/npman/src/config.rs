//! Config resolution for the CLI: profile + flag/env overrides.
//!
//! `npman-config` owns the file format and credential chain; this
//! module layers `GlobalOpts` on top and produces the `ManagerConfig`
//! handed to `Manager::connect`.

use npman_config::{Config, Defaults, Profile};
use npman_core::ManagerConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The profile name in effect: flag/env, then the config default.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ManagerConfig` from the config file, active profile, and
/// CLI overrides. Works without a config file when `--url` (or
/// `NPM_URL`) is present.
pub fn build_manager_config(global: &GlobalOpts) -> Result<ManagerConfig, CliError> {
    let cfg = npman_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile.clone(), &profile_name, &cfg.defaults, global);
    }

    // No profile found -- build one from CLI flags / env vars alone.
    let url = global.url.clone().ok_or_else(|| CliError::NoConfig {
        path: npman_config::config_path().display().to_string(),
    })?;

    let profile = Profile {
        url,
        identity: None,
        password: None,
        password_env: None,
        ca_cert: None,
        insecure: None,
        timeout: None,
    };
    resolve_profile(profile, &profile_name, &cfg.defaults, global)
}

/// Apply flag overrides on top of a profile and translate it.
fn resolve_profile(
    mut profile: Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<ManagerConfig, CliError> {
    if let Some(ref url) = global.url {
        profile.url.clone_from(url);
    }
    if global.identity.is_some() {
        profile.identity.clone_from(&global.identity);
    }
    if global.password_env.is_some() {
        profile.password_env.clone_from(&global.password_env);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    Ok(npman_config::profile_to_manager_config(
        &profile,
        profile_name,
        defaults,
    )?)
}
