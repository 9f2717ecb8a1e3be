use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SentryConfig {
    pub enabled: bool,
    pub dsn: String,
    pub debug: bool,
    pub sample_rate: f32,
    pub max_breadcrumbs: usize,
    pub attach_stacktrace: bool,
    pub send_default_pii: bool,
    pub traces_sample_rate: f32
}

impl Default for SentryConfig {
    fn default() -> Self {
        SentryConfig {
            enabled: false,
            dsn: String::new(),
            debug: false,
            sample_rate: 1.0,
            max_breadcrumbs: 100,
            attach_stacktrace: true,
            send_default_pii: false,
            traces_sample_rate: 1.0,
        }
    }
}
