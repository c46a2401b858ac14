use std::collections::HashMap;

use serde::Serialize;

use crate::config::{
    APP_ADMIN, APP_API, APP_AUTH, APP_CONTENTTYPES, APP_MESSAGES, APP_REPORTS, APP_SESSIONS,
    APP_STATICFILES, APP_TRAINING,
};
use crate::errors::{AppError, AppResult};

/// Configuration of a single installed application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Full dotted name, e.g. `contrib.auth`
    pub name: String,
    /// Short label, the last segment of `name`
    pub label: String,
    pub verbose_name: String,
}

impl AppConfig {
    /// Build the configuration for an application name.
    pub fn new(name: &str) -> AppResult<Self> {
        let name = name.trim();
        let label = name.rsplit('.').next().unwrap_or_default();
        if name.is_empty() || label.is_empty() {
            return Err(AppError::config(format!(
                "invalid application name {:?}",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            label: label.to_string(),
            verbose_name: verbose_name_for(name, label),
        })
    }
}

fn verbose_name_for(name: &str, label: &str) -> String {
    match name {
        APP_ADMIN => "Administration".to_string(),
        APP_AUTH => "Authentication and Authorization".to_string(),
        APP_CONTENTTYPES => "Content Types".to_string(),
        APP_SESSIONS => "Sessions".to_string(),
        APP_MESSAGES => "Messages".to_string(),
        APP_STATICFILES => "Static Files".to_string(),
        APP_API => "API".to_string(),
        APP_REPORTS => "Reports".to_string(),
        APP_TRAINING => "Training".to_string(),
        _ => {
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Registry of installed applications, keyed by label.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    configs: Vec<AppConfig>,
    by_label: HashMap<String, usize>,
    ready: bool,
}

impl AppRegistry {
    /// Populate the registry from installed application names.
    ///
    /// Fails on empty names and on two applications sharing a label.
    pub fn populate<I, S>(names: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();

        for name in names {
            let config = AppConfig::new(name.as_ref())?;
            if registry.by_label.contains_key(&config.label) {
                return Err(AppError::config(format!(
                    "application labels aren't unique, duplicates: {}",
                    config.label
                )));
            }
            registry
                .by_label
                .insert(config.label.clone(), registry.configs.len());
            registry.configs.push(config);
        }

        registry.ready = true;
        tracing::debug!(apps = registry.configs.len(), "Application registry ready");
        Ok(registry)
    }

    /// Look up an application by label.
    pub fn get_app_config(&self, label: &str) -> AppResult<&AppConfig> {
        self.by_label
            .get(label)
            .map(|&idx| &self.configs[idx])
            .ok_or(AppError::NotFound)
    }

    /// Whether an application with this full name is installed.
    pub fn is_installed(&self, name: &str) -> bool {
        self.configs.iter().any(|c| c.name == name)
    }

    /// All application configs in load order.
    pub fn app_configs(&self) -> &[AppConfig] {
        &self.configs
    }

    pub fn ready(&self) -> bool {
        self.ready
    }
}
