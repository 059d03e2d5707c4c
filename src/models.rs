use serde::{Deserialize, Serialize};

/// Dataset location used by the original reporting workflow.
pub const DEFAULT_DATASET_PATH: &str = "drewsdata/intakedata20181-20193.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: Some(DEFAULT_DATASET_PATH.to_string()),
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, file_path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(file_path, content)?;
        Ok(())
    }
}

/// One row of the intake dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeRecord {
    #[serde(rename = "Quarter")]
    pub quarter: String,
    #[serde(rename = "Week")]
    pub week: i64,
    #[serde(rename = "Intakes")]
    pub intakes: i64,
}

impl IntakeRecord {
    /// Exact equality on both fields, no trimming or case folding.
    pub fn matches(&self, quarter: &str, week: i64) -> bool {
        self.quarter == quarter && self.week == week
    }
}

/// The lookup requested on the command line.
#[derive(Debug, Clone)]
pub struct Query {
    pub quarter: String,
    pub week: i64,
    pub num_doctors: i64,
}
