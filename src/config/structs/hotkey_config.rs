use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HotkeyConfig {
    pub enabled: bool,
    pub window_secs: u64,
    pub threshold: u64,
    pub shards: usize,
    pub top_n: usize,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_secs: 60,
            threshold: 1000,
            shards: 8,
            top_n: 10,
        }
    }
}
