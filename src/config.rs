use crate::aggregate::MetTable;
use crate::models::Category;
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown category '{0}' in FITNESS_CATEGORIES")]
    UnknownCategory(String),

    #[error("FITNESS_CATEGORIES must name at least one category")]
    NoCategories,

    #[error("invalid FITNESS_MET entry '{0}', expected Label=value")]
    InvalidMet(String),

    #[error("invalid boolean '{value}' for {key}")]
    InvalidFlag { key: &'static str, value: String },
}

/// Optional presentation features. The aggregation core never looks at these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub charts: bool,
    pub export: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            charts: true,
            export: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub categories: Vec<Category>,
    pub met_table: Option<MetTable>,
    pub capabilities: Capabilities,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            categories: Category::ALL.to_vec(),
            met_table: Some(MetTable::default()),
            capabilities: Capabilities::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Reads settings through `get` so tests don't touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = get("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let categories = match get("FITNESS_CATEGORIES") {
            Some(raw) => parse_categories(&raw)?,
            None => defaults.categories,
        };

        let met_table = match get("FITNESS_MET") {
            Some(raw) => parse_met(&raw)?,
            None => defaults.met_table,
        };

        let capabilities = Capabilities {
            charts: parse_flag("FITNESS_CHARTS", get("FITNESS_CHARTS"))?.unwrap_or(true),
            export: parse_flag("FITNESS_EXPORT", get("FITNESS_EXPORT"))?.unwrap_or(true),
        };

        Ok(Self {
            port,
            categories,
            met_table,
            capabilities,
        })
    }
}

fn parse_categories(raw: &str) -> Result<Vec<Category>, ConfigError> {
    let mut categories = Vec::new();
    for label in raw.split(',').map(str::trim).filter(|label| !label.is_empty()) {
        let category =
            Category::from_label(label).ok_or_else(|| ConfigError::UnknownCategory(label.into()))?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    if categories.is_empty() {
        return Err(ConfigError::NoCategories);
    }
    Ok(categories)
}

// "off" disables calorie estimates; otherwise entries override the defaults.
fn parse_met(raw: &str) -> Result<Option<MetTable>, ConfigError> {
    if raw.trim().eq_ignore_ascii_case("off") {
        return Ok(None);
    }

    let mut table = MetTable::default();
    for pair in raw.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let invalid = || ConfigError::InvalidMet(pair.to_string());
        let (label, value) = pair.split_once('=').ok_or_else(invalid)?;
        let category = Category::from_label(label).ok_or_else(invalid)?;
        let met: f64 = value.trim().parse().map_err(|_| invalid())?;
        if !met.is_finite() || met <= 0.0 {
            return Err(invalid());
        }
        table.set(category, met);
    }
    Ok(Some(table))
}

fn parse_flag(key: &'static str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(Some(true)),
        "0" | "false" | "off" | "no" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.categories, Category::ALL.to_vec());
        assert_eq!(cfg.met_table, Some(MetTable::default()));
        assert_eq!(cfg.capabilities, Capabilities::default());
    }

    #[test]
    fn reads_values() {
        let get = |k: &str| match k {
            "PORT" => Some("9000".into()),
            "FITNESS_CATEGORIES" => Some("Workout, cool-down".into()),
            "FITNESS_MET" => Some("Workout=8".into()),
            "FITNESS_CHARTS" => Some("off".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.categories, vec![Category::Workout, Category::CoolDown]);
        let met = cfg.met_table.expect("met table");
        assert_eq!(met.met_for(Category::Workout), Some(8.0));
        assert_eq!(met.met_for(Category::WarmUp), Some(3.0));
        assert!(!cfg.capabilities.charts);
        assert!(cfg.capabilities.export);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let cfg = Config::from_env_with(|k| (k == "PORT").then(|| "not-a-port".into())).unwrap();
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn met_can_be_disabled() {
        let cfg = Config::from_env_with(|k| (k == "FITNESS_MET").then(|| "OFF".into())).unwrap();
        assert!(cfg.met_table.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let res = Config::from_env_with(|k| (k == "FITNESS_CATEGORIES").then(|| "Yoga".into()));
        assert_eq!(res.unwrap_err(), ConfigError::UnknownCategory("Yoga".into()));

        let res = Config::from_env_with(|k| (k == "FITNESS_CATEGORIES").then(|| " , ".into()));
        assert_eq!(res.unwrap_err(), ConfigError::NoCategories);

        let res = Config::from_env_with(|k| (k == "FITNESS_MET").then(|| "Workout".into()));
        assert!(matches!(res, Err(ConfigError::InvalidMet(_))));

        let res = Config::from_env_with(|k| (k == "FITNESS_EXPORT").then(|| "maybe".into()));
        assert!(matches!(res, Err(ConfigError::InvalidFlag { key: "FITNESS_EXPORT", .. })));
    }
}
