use std::path::Path;

use anyhow::Context;
use log::info;

pub use tsgenitor_core::Options;

/** What to generate, and from which Swagger document */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    path: String,
    header_parameters: bool,
    models_module: Option<String>,
    runtime_module: Option<String>,
}

impl ApiConfig {
    pub fn new_from_path(path: impl Into<String>) -> Self {
        ApiConfig {
            path: path.into(),
            header_parameters: false,
            models_module: None,
            runtime_module: None,
        }
    }

    pub fn with_header_parameters(mut self, header_parameters: bool) -> Self {
        self.header_parameters = header_parameters;
        self
    }

    pub fn with_models_module(mut self, models_module: impl Into<String>) -> Self {
        self.models_module = Some(models_module.into());
        self
    }

    pub fn with_runtime_module(mut self, runtime_module: impl Into<String>) -> Self {
        self.runtime_module = Some(runtime_module.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn options(&self) -> Options {
        let defaults = Options::default();
        Options {
            use_header_parameters: self.header_parameters,
            models_module: self.models_module.clone().unwrap_or(defaults.models_module),
            runtime_module: self.runtime_module.clone().unwrap_or(defaults.runtime_module),
        }
    }
}

/// Generates the TypeScript request module for the configured document
pub fn generate_string(config: &ApiConfig) -> anyhow::Result<String> {
    tsgenitor_core::generate_from_path(Path::new(config.path()), &config.options())
}

/// Generates the TypeScript request module and writes it to `output_path`
pub fn generate_file(config: &ApiConfig, output_path: &Path) -> anyhow::Result<()> {
    let ts = generate_string(config)?;

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {} failed", dir.display()))?;
    }
    std::fs::write(output_path, ts)
        .with_context(|| format!("writing {} failed", output_path.display()))?;

    info!("wrote {}", output_path.display());
    Ok(())
}
