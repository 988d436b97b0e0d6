use serde::{Deserialize, Serialize};

use super::User;

/// Body of `POST /users/demo_login/`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login: the bearer token and the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Response of `GET /receipts/{id}/file`: a one-time link to the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptFile {
    pub file: String,
}
