use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::license::identifier::KNOWN_LICENSES;
use crate::models::{PolicyVerdict, UNKNOWN};

/// Root configuration structure, deserialized from `.license-guess/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// License policy rules.
    pub policy: PolicyConfig,
}

/// Maps identified licenses to the verdict the CLI reports for them.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// Verdict applied to any license not explicitly listed in `licenses`.
    /// Defaults to `warn`.
    #[serde(default = "default_policy_action")]
    pub default: PolicyAction,
    /// Per-license overrides keyed by identifier (e.g. `"MIT"`, `"GPL-3.0"`),
    /// plus `"unknown"` for targets whose license could not be identified.
    #[serde(default)]
    pub licenses: HashMap<String, PolicyAction>,
}

fn default_policy_action() -> PolicyAction {
    PolicyAction::Warn
}

/// The action to take when a finding's license matches a policy rule.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Pass,
    /// Reported, but does not fail the run.
    Warn,
    /// The CLI exits with code 1.
    Error,
}

impl PolicyAction {
    pub fn to_verdict(self) -> PolicyVerdict {
        match self {
            PolicyAction::Pass => PolicyVerdict::Pass,
            PolicyAction::Warn => PolicyVerdict::Warn,
            PolicyAction::Error => PolicyVerdict::Error,
        }
    }
}

impl Default for Config {
    /// Built-in policy used when no config file is found: every identifiable
    /// license passes and anything unidentified warns.
    fn default() -> Self {
        let mut licenses: HashMap<String, PolicyAction> = KNOWN_LICENSES
            .iter()
            .map(|id| (id.to_string(), PolicyAction::Pass))
            .collect();
        licenses.insert(UNKNOWN.to_string(), PolicyAction::Warn);

        Config {
            policy: PolicyConfig {
                default: PolicyAction::Warn,
                licenses,
            },
        }
    }
}

/// Load the policy configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<base>/.license-guess/config.toml`
/// 3. `~/.config/license-guess/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = base.join(".license-guess").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-guess")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::debug!("loaded policy from {}", path.display());
    Ok(config)
}

/// Determine the verdict for a license identifier, or for `None` when the
/// license could not be identified.
pub fn apply_policy(config: &Config, license: Option<&str>) -> PolicyVerdict {
    let key = license.unwrap_or(UNKNOWN);
    config
        .policy
        .licenses
        .get(key)
        .copied()
        .unwrap_or(config.policy.default)
        .to_verdict()
}
