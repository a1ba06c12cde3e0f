use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StoreStructureConfig {
    pub table_name: String,
    pub column_token_hash: String,
    pub column_user_id: String,
    pub column_org_id: String,
    pub column_issued_at: String,
    pub column_expires_at: String,
    pub column_last_activity: String,
}

impl Default for StoreStructureConfig {
    fn default() -> Self {
        Self {
            table_name: String::from("sessions"),
            column_token_hash: String::from("token_hash"),
            column_user_id: String::from("user_id"),
            column_org_id: String::from("org_id"),
            column_issued_at: String::from("issued_at"),
            column_expires_at: String::from("expires_at"),
            column_last_activity: String::from("last_activity_at"),
        }
    }
}
