//! Wire schemas for the catalog API.
//!
//! DESIGN
//! ======
//! Every request and response body the client touches has an explicit type
//! here, so shape drift fails at the gateway boundary instead of deep inside
//! rendering code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Organization-scoped project. Rows with `deleted_at` set are soft-deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub organization_id: u64,
    #[serde(default)]
    pub deleted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    /// Whether the project is still live (not soft-deleted).
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Organization-wide catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharedProduct {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub sku: String,
    pub organization_id: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Product owned by a single project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectProduct {
    pub id: u64,
    pub project_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Shared product this row was copied from, if any.
    #[serde(default)]
    pub original_shared_product_id: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Read-only group company reference row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupCompany {
    pub id: u64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Legacy todo item. The server spells its timestamps in camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", alias = "updated_at", default)]
    pub updated_at: String,
}

/// Body for `POST /login` and `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Credentials from form input; the username is trimmed, the password is
    /// taken as typed.
    ///
    /// # Errors
    ///
    /// Returns a message when either field is empty.
    pub fn from_input(username: &str, password: &str) -> Result<Self, &'static str> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err("Enter a username and password.");
        }
        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// Successful `POST /login` answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /register` answers either with a token or with a plain message.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RegisterResponse {
    Token(TokenResponse),
    Message(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CopyProductRequest {
    pub shared_product_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTodoRequest {
    pub content: String,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
