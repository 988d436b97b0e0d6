//! # Employee record
//!
//! [`User`] is a read-only projection of the server-owned employee record. It is
//! returned by the login endpoint (the logged-in administrator) and by the users
//! listing (one per row), and it is what the session store persists.
//!
//! Every field is defaulted on deserialisation: the listing and login endpoints do
//! not always send the same subset, and a missing or `null` field must never make a
//! whole page unreadable. Timestamps stay as the server's ISO-8601 strings; views format them.

use serde::{Deserialize, Serialize};

/// Employee / account information as sent by the API (camelCase on the wire).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "super::nullable")]
    pub id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub initials: String,
    #[serde(deserialize_with = "super::nullable")]
    pub username: String,
    #[serde(deserialize_with = "super::nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "super::nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "super::nullable")]
    pub full_name: String,
    #[serde(deserialize_with = "super::nullable")]
    pub email: String,
    #[serde(deserialize_with = "super::nullable")]
    pub phone_number: String,
    #[serde(deserialize_with = "super::nullable")]
    pub employee_number: u64,
    #[serde(deserialize_with = "super::nullable")]
    pub role: String,
    #[serde(deserialize_with = "super::nullable")]
    pub nationality: String,
    #[serde(deserialize_with = "super::nullable")]
    pub address: String,
    pub is_active: Option<bool>,
    #[serde(deserialize_with = "super::nullable")]
    pub is_superuser: bool,
    #[serde(deserialize_with = "super::nullable")]
    pub has_pending_receipts: bool,
    #[serde(deserialize_with = "super::nullable")]
    pub required_password_change: bool,
    pub last_login: Option<String>,
    pub date_joined: Option<String>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

impl User {
    /// Get display name, falling back to the username and then the email.
    pub fn display_name(&self) -> &str {
        [&self.full_name, &self.username, &self.email]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Initials for avatars: the server's value when present, otherwise derived from the name.
    pub fn avatar_initials(&self) -> String {
        if !self.initials.trim().is_empty() {
            return self.initials.trim().to_uppercase();
        }
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Whether the account is active. Records without the flag are considered active.
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_partial_payload() {
        let user: User = serde_json::from_str(
            r#"{"id":"7","fullName":"Ana Garcia","employeeNumber":12,"phoneNumber":"0981"}"#,
        )
        .unwrap();

        assert_eq!(user.id, "7");
        assert_eq!(user.full_name, "Ana Garcia");
        assert_eq!(user.employee_number, 12);
        assert_eq!(user.phone_number, "0981");
        assert!(user.email.is_empty());
        assert!(user.active());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let user: User = serde_json::from_str(
            r#"{"id":"7","fullName":"Ana","address":null,"phoneNumber":null,"initials":null,"employeeNumber":null,"isSuperuser":null}"#,
        )
        .unwrap();

        assert_eq!(user.full_name, "Ana");
        assert!(user.address.is_empty());
        assert!(user.phone_number.is_empty());
        assert_eq!(user.employee_number, 0);
        assert!(!user.is_superuser);
        assert_eq!(user.avatar_initials(), "A");
    }

    #[test]
    fn test_page_with_one_sparse_user_still_reads() {
        let page: crate::models::PageResponse<User> = serde_json::from_str(
            r#"{"results":[{"id":"1","fullName":"Ana Garcia"},{"id":"2","role":null,"nationality":null}],"next":null}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.results[1].role.is_empty());
    }

    #[test]
    fn test_avatar_initials() {
        let mut user = User {
            full_name: "ana maría garcia".to_string(),
            ..User::default()
        };
        assert_eq!(user.avatar_initials(), "AMG");

        user.initials = "ag".to_string();
        assert_eq!(user.avatar_initials(), "AG");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let user = User {
            email: "ana@example.com".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "ana@example.com");
    }
}
