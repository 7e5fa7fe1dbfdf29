/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub n_elevators: usize,
    pub capacity: usize,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval: u64,
    pub auto_start: bool,
    pub print_every_step: bool,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            tick_interval: 0,
            auto_start: true,
            print_every_step: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    // Same lower bounds the building enforces, caught before anything is spawned
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.n_floors < 2 {
            return Err(ConfigError::Invalid("n_floors must be at least 2".to_string()));
        }
        if self.building.n_elevators < 1 {
            return Err(ConfigError::Invalid("n_elevators must be at least 1".to_string()));
        }
        if self.building.capacity < 1 {
            return Err(ConfigError::Invalid("capacity must be at least 1".to_string()));
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
