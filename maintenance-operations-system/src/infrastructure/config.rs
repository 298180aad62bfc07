use serde::Deserialize;

/// Runtime configuration, read from `config/board.yaml` (optional) with
/// `BOARD_*` environment overrides on top.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BoardConfig {
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Seconds between ticket snapshots fed to the change classifier.
    #[serde(default = "PollConfig::default_interval_secs")]
    pub interval_secs: u64,
}

impl PollConfig {
    fn default_interval_secs() -> u64 {
        30
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: Self::default_interval_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Assets whose reconciled week is summarized each cycle.
    #[serde(default)]
    pub assets: Vec<String>,
    #[serde(default = "ReportConfig::default_interval_secs")]
    pub interval_secs: u64,
}

impl ReportConfig {
    fn default_interval_secs() -> u64 {
        300
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            assets: vec![],
            interval_secs: Self::default_interval_secs(),
        }
    }
}

impl BoardConfig {
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/board").required(false))
            .add_source(config::Environment::with_prefix("BOARD").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
