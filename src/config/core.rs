use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::Path;

use super::{ConfigOverrides, DashboardConfig};

// Embed the default config at compile time
pub(super) const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "QDASH_";

impl DashboardConfig {
    /// Resolve the configuration from every layer and validate it
    pub fn load(custom_config: Option<&Path>, overrides: Option<&ConfigOverrides>) -> Result<Self> {
        let config: DashboardConfig = Self::figment(custom_config, overrides)?
            .extract()
            .context("Invalid qdash configuration")?;
        config.validate()?;

        tracing::debug!(
            "Config resolved: inputs={}, outputs={}",
            config.inputs.dir.display(),
            config.outputs.dir.display()
        );
        Ok(config)
    }

    /// Build the layered provider chain, lowest priority first
    pub fn figment(
        custom_config: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Figment> {
        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG)) // Embedded defaults
            .merge(Toml::file("qdash.toml"))
            .merge(Json::file("qdash.json"))
            .merge(Yaml::file("qdash.yaml"))
            .merge(Yaml::file("qdash.yml"));

        if let Some(path) = custom_config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::trace!("CONFIG LOAD: custom file {}", path.display());
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }

        // Environment variables override files
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        // CLI flags have the highest priority
        if let Some(overrides) = overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::defaults(overrides.to_value()));
        }

        Ok(figment)
    }
}
