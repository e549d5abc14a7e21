//! This module is responsible for reading solver configuration from json.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use vogel_core::prelude::*;
use vogel_core::utils::Parallelism;
use vogel_pragmatic::format::solution::WriterOptions;

/// A solver configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies which optional parts are written into the solution.
    pub output: Option<OutputConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies whether every allocation step is logged. Default is false.
    pub log_steps: Option<bool>,
}

/// An output configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Write quantities assigned to the dummy line. Default is false.
    pub include_slack: Option<bool>,
    /// Write allocation steps. Default is false.
    pub include_steps: Option<bool>,
}

/// An environment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// Specifies data parallelism settings.
    pub parallelism: Option<ParallelismConfig>,
}

/// A data parallelism configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelismConfig {
    /// Amount of threads used to solve several problems at once.
    pub num_threads: usize,
}

impl Config {
    /// Enables logging keeping other telemetry settings.
    pub fn with_logging(mut self) -> Self {
        let log_steps = self.logging().and_then(|logging| logging.log_steps);
        self.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, log_steps }) });

        self
    }

    /// Requests optional output parts in addition to configured ones.
    pub fn with_output(mut self, include_slack: bool, include_steps: bool) -> Self {
        let output = self.output.take().unwrap_or_default();
        self.output = Some(OutputConfig {
            include_slack: Some(include_slack || output.include_slack.unwrap_or(false)),
            include_steps: Some(include_steps || output.include_steps.unwrap_or(false)),
        });

        self
    }

    fn logging(&self) -> Option<&LoggingConfig> {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref())
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a solver from config.
pub fn create_solver_from_config(config: &Config) -> Result<Solver, GenericError> {
    let logging = config.logging().filter(|logging| logging.enabled);

    let logger: InfoLogger = if logging.is_some() { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_| ()) };

    let telemetry_mode = logging.map_or(TelemetryMode::None, |logging| TelemetryMode::OnlyLogging {
        logger: logger.clone(),
        log_steps: logging.log_steps.unwrap_or(false),
    });

    let parallelism = match config.environment.as_ref().and_then(|environment| environment.parallelism.as_ref()) {
        Some(ParallelismConfig { num_threads }) => Parallelism::new(*num_threads)?,
        None => Parallelism::default(),
    };

    let environment = Environment::new(parallelism, logger);

    Ok(Solver::new(Arc::new(environment), telemetry_mode))
}

/// Creates solution writer options from config.
pub fn create_writer_options(config: &Config) -> WriterOptions {
    config.output.as_ref().map_or(WriterOptions::default(), |output| WriterOptions {
        include_slack: output.include_slack.unwrap_or(false),
        include_steps: output.include_steps.unwrap_or(false),
    })
}
