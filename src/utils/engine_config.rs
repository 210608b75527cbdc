// src/utils/engine_config.rs - Runtime knobs for the normalization pipeline
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker threads used for per-record normalization.
    pub workers: usize,
    /// Batches smaller than this are normalized on the calling thread.
    pub parallel_threshold: usize,
    /// Master-data snapshot (file or directory).
    pub reference_data_path: Option<PathBuf>,
    pub progress_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            reference_data_path: None,
            progress_enabled: true,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            workers: env::var("NORMALIZER_WORKERS")
                .unwrap_or_else(|_| num_cpus::get().to_string())
                .parse()
                .unwrap_or_else(|_| num_cpus::get())
                .max(1),
            parallel_threshold: env::var("NORMALIZER_PARALLEL_THRESHOLD")
                .unwrap_or_else(|_| DEFAULT_PARALLEL_THRESHOLD.to_string())
                .parse()
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
                .max(1),
            reference_data_path: env::var("REFERENCE_DATA_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            progress_enabled: env::var("PROGRESS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn log_config(&self) {
        info!("⚙️  Normalizer workers: {} (parallel from {} listings)", self.workers, self.parallel_threshold);
        match &self.reference_data_path {
            Some(path) => info!("📚 Reference data: {}", path.display()),
            None => info!("📚 Reference data: not configured"),
        }
        info!("📊 Progress bars {}", if self.progress_enabled { "enabled" } else { "disabled" });
    }

    /// Phase progress bar, or `None` when progress output is disabled.
    pub fn create_progress_bar(&self, len: u64) -> Option<ProgressBar> {
        if !self.progress_enabled {
            return None;
        }
        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
        }
        Some(pb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.reference_data_path.is_none());
        assert!(config.progress_enabled);
    }

    #[test]
    fn test_env_config() {
        env::set_var("NORMALIZER_WORKERS", "3");
        env::set_var("NORMALIZER_PARALLEL_THRESHOLD", "10");
        env::set_var("REFERENCE_DATA_PATH", "data/master.json");
        env::set_var("PROGRESS_ENABLED", "false");

        let config = EngineConfig::from_env();
        assert_eq!(config.workers, 3);
        assert_eq!(config.parallel_threshold, 10);
        assert_eq!(config.reference_data_path, Some(PathBuf::from("data/master.json")));
        assert!(!config.progress_enabled);
        assert!(config.create_progress_bar(4).is_none());

        env::set_var("NORMALIZER_WORKERS", "zero");
        assert_eq!(EngineConfig::from_env().workers, num_cpus::get().max(1));

        env::set_var("NORMALIZER_PARALLEL_THRESHOLD", "0");
        assert_eq!(EngineConfig::from_env().parallel_threshold, 1);

        env::remove_var("NORMALIZER_WORKERS");
        env::remove_var("NORMALIZER_PARALLEL_THRESHOLD");
        env::remove_var("REFERENCE_DATA_PATH");
        env::remove_var("PROGRESS_ENABLED");
    }
}
