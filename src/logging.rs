use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::Config;
use crate::errors::{ExamError, ExamResult};

/// Set up `env_logger`. The terminal belongs to the UI, so records only go
/// to `REET_LOG_FILE` when it is set; otherwise logging stays off unless
/// `RUST_LOG` asks for it.
pub fn init_logging(config: &Config) -> ExamResult<()> {
    let mut builder = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("off")),
    };

    builder
        .try_init()
        .map_err(|e| ExamError::Config(format!("logger already initialised: {}", e)))
}
