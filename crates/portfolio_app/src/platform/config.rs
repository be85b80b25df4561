use std::fs;
use std::path::Path;
use std::time::Duration;

use page_logging::page_warn;
use portfolio_core::PageConfig;
use portfolio_runtime::RuntimeConfig;
use serde::Deserialize;

const CONFIG_FILENAME: &str = "portfolio.ron";

/// On-disk override of the page's timing and threshold knobs. Every entry is
/// optional; absent fields keep the original page's values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ConfigFile {
    submit_latency_ms: u64,
    notification_display_ms: u64,
    notification_exit_ms: u64,
    max_visible_notifications: usize,
    stagger_interval_ms: u64,
    counter_duration_ms: u64,
    typing_start_delay_ms: u64,
    typing_speed_ms: u64,
    reveal_threshold: f64,
    reveal_bottom_margin_px: i64,
    counter_threshold: f64,
    navbar_scroll_threshold: i64,
    active_section_bias_px: i64,
    smooth_scroll_offset_px: i64,
    parallax_factor: f64,
    pointer_shift_px: f64,
    frame_interval_ms: u64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let page = PageConfig::default();
        Self {
            submit_latency_ms: page.submit_latency_ms,
            notification_display_ms: page.notification_display_ms,
            notification_exit_ms: page.notification_exit_ms,
            max_visible_notifications: page.max_visible_notifications,
            stagger_interval_ms: page.stagger_interval_ms,
            counter_duration_ms: page.counter_duration_ms,
            typing_start_delay_ms: page.typing_start_delay_ms,
            typing_speed_ms: page.typing_speed_ms,
            reveal_threshold: page.reveal_threshold,
            reveal_bottom_margin_px: page.reveal_bottom_margin_px,
            counter_threshold: page.counter_threshold,
            navbar_scroll_threshold: page.navbar_scroll_threshold,
            active_section_bias_px: page.active_section_bias_px,
            smooth_scroll_offset_px: page.smooth_scroll_offset_px,
            parallax_factor: page.parallax_factor,
            pointer_shift_px: page.pointer_shift_px,
            frame_interval_ms: 16,
        }
    }
}

impl ConfigFile {
    fn into_configs(self) -> (PageConfig, RuntimeConfig) {
        let page = PageConfig {
            submit_latency_ms: self.submit_latency_ms,
            notification_display_ms: self.notification_display_ms,
            notification_exit_ms: self.notification_exit_ms,
            max_visible_notifications: self.max_visible_notifications,
            stagger_interval_ms: self.stagger_interval_ms,
            counter_duration_ms: self.counter_duration_ms,
            typing_start_delay_ms: self.typing_start_delay_ms,
            typing_speed_ms: self.typing_speed_ms,
            reveal_threshold: self.reveal_threshold,
            reveal_bottom_margin_px: self.reveal_bottom_margin_px,
            counter_threshold: self.counter_threshold,
            navbar_scroll_threshold: self.navbar_scroll_threshold,
            active_section_bias_px: self.active_section_bias_px,
            smooth_scroll_offset_px: self.smooth_scroll_offset_px,
            parallax_factor: self.parallax_factor,
            pointer_shift_px: self.pointer_shift_px,
        };
        let runtime = RuntimeConfig {
            submit_latency: Duration::from_millis(self.submit_latency_ms),
            frame_interval: Duration::from_millis(self.frame_interval_ms),
        };
        (page, runtime)
    }
}

/// Loads `portfolio.ron` from `dir`, falling back to defaults when the file
/// is absent or malformed.
pub(crate) fn load_config(dir: &Path) -> (PageConfig, RuntimeConfig) {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ConfigFile::default().into_configs();
        }
        Err(err) => {
            page_warn!("Failed to read config from {:?}: {}", path, err);
            return ConfigFile::default().into_configs();
        }
    };

    match ron::from_str::<ConfigFile>(&content) {
        Ok(file) => file.into_configs(),
        Err(err) => {
            page_warn!("Failed to parse config from {:?}: {}", path, err);
            ConfigFile::default().into_configs()
        }
    }
}
