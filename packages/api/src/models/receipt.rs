use serde::{Deserialize, Serialize};

/// A payroll receipt row. Server-authoritative, read-only snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    #[serde(deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "super::nullable")]
    pub r#type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub employee: String,
    #[serde(deserialize_with = "super::nullable")]
    pub employee_full_name: String,
    #[serde(deserialize_with = "super::nullable")]
    pub employee_number: String,
    #[serde(deserialize_with = "super::nullable")]
    pub year: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub month: u32,
    pub full_date: Option<String>,
    pub is_active: Option<bool>,
    #[serde(deserialize_with = "super::nullable")]
    pub is_sended: bool,
    #[serde(deserialize_with = "super::nullable")]
    pub is_readed: bool,
    #[serde(deserialize_with = "super::nullable")]
    pub is_signed: bool,
    pub sended_date: Option<String>,
    pub readed_date: Option<String>,
    pub signed_date: Option<String>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

impl Receipt {
    /// Period label as shown in the listing, e.g. `"3/2024"`.
    pub fn period(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}
