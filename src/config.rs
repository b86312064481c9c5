use crate::models::errors::ConfigError;
use crate::services::normalize::DEFAULT_AVAILABILITY_RATIO;
use crate::services::source::CATALOG_BASE_URL;
use crate::utils::cover::COVERS_BASE_URL;
use std::collections::HashMap;

pub const DEFAULT_SUBJECTS: [&str; 24] = [
    "computer_science",
    "mathematics",
    "economics",
    "management",
    "statistics",
    "biology",
    "chemistry",
    "physics",
    "history",
    "philosophy",
    "psychology",
    "literature",
    "art",
    "music",
    "engineering",
    "medicine",
    "architecture",
    "sociology",
    "law",
    "business",
    "education",
    "astronomy",
    "geography",
    "anthropology",
];

pub const DEFAULT_PORT: u16 = 7004;
pub const DEFAULT_SUBJECT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub catalog_base_url: String,
    pub covers_base_url: String,
    pub subjects: Vec<String>,
    pub subject_limit: usize,
    pub availability_ratio: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_base_url: CATALOG_BASE_URL.to_string(),
            covers_base_url: COVERS_BASE_URL.to_string(),
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            subject_limit: DEFAULT_SUBJECT_LIMIT,
            availability_ratio: DEFAULT_AVAILABILITY_RATIO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let port = parse_var(&vars, "PORT", defaults.port)?;
        let subject_limit = parse_var(&vars, "SUBJECT_LIMIT", defaults.subject_limit)?;
        let availability_ratio =
            parse_var(&vars, "AVAILABILITY_RATIO", defaults.availability_ratio)?;

        let subjects = match vars.get("CATALOG_SUBJECTS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.subjects,
        };

        if subject_limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if !(0.0..=1.0).contains(&availability_ratio) {
            return Err(ConfigError::RatioOutOfRange(availability_ratio));
        }
        if subjects.is_empty() {
            return Err(ConfigError::NoSubjects);
        }

        Ok(Self {
            port,
            catalog_base_url: vars
                .get("CATALOG_BASE_URL")
                .cloned()
                .unwrap_or(defaults.catalog_base_url),
            covers_base_url: vars
                .get("COVERS_BASE_URL")
                .cloned()
                .unwrap_or(defaults.covers_base_url),
            subjects,
            subject_limit,
            availability_ratio,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    vars: &HashMap<String, String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match vars.get(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.clone(),
        }),
        None => Ok(default),
    }
}
