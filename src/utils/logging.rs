// src/utils/logging.rs - Phase and summary log lines for pipeline runs
use log::info;
use std::time::Instant;

use crate::models::NormalizationStats;

#[derive(Clone)]
pub struct PipelineLogger {
    tag: &'static str,
    emoji: &'static str,
    start_time: Instant,
}

impl PipelineLogger {
    pub fn new(tag: &'static str, emoji: &'static str) -> Self {
        Self {
            tag,
            emoji,
            start_time: Instant::now(),
        }
    }

    pub fn log_start(&self, what: &str) {
        info!("[{}] {} 🚀 Starting {}", self.tag, self.emoji, what);
    }

    pub fn log_phase(&self, phase: &str, details: Option<&str>) {
        let elapsed = self.start_time.elapsed().as_secs_f32();
        match details {
            Some(details) => info!(
                "[{}] {} 🔄 Phase: {} - {} [+{:.1}s]",
                self.tag, self.emoji, phase, details, elapsed
            ),
            None => info!("[{}] {} 🔄 Phase: {} [+{:.1}s]", self.tag, self.emoji, phase, elapsed),
        }
    }

    pub fn log_data_loaded(&self, count: usize, data_type: &str) {
        info!("[{}] {} 📊 Loaded {} {}", self.tag, self.emoji, count, data_type);
    }

    pub fn log_stats(&self, stats: &NormalizationStats) {
        let resolved_pct = if stats.total_listings > 0 {
            (stats.resolved_identities as f64 / stats.total_listings as f64) * 100.0
        } else {
            0.0
        };
        info!(
            "[{}] {} 🎯 Identities: {}/{} resolved ({:.1}%)",
            self.tag, self.emoji, stats.resolved_identities, stats.total_listings, resolved_pct
        );
        info!(
            "[{}] {} 🧩 Options: {} real, {} color, {} junk",
            self.tag, self.emoji, stats.real_options, stats.color_options, stats.junk_options
        );
    }

    pub fn log_completion(&self, listings: usize, groups: usize) {
        info!(
            "[{}] {} ✅ Completed: {} listings → {} groups in {:.2?}",
            self.tag,
            self.emoji,
            listings,
            groups,
            self.start_time.elapsed()
        );
    }
}
