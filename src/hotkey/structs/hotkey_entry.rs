use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HotkeyEntry {
    pub key: String,
    pub window_count: u64,
}
