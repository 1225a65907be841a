//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so values are baked
//! in through `option_env!` when the crate is compiled.
//!
//! Variables:
//! - `CATALOG_API_BASE_URL`: remote API origin (default `http://localhost:8080`)
//! - `CATALOG_ORGANIZATION_ID`: organization used when the token carries none
//!   (default `1`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_ORGANIZATION_ID: u64 = 1;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "jwt_token";

/// How long a success banner stays visible.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub fallback_organization_id: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            fallback_organization_id: DEFAULT_ORGANIZATION_ID,
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CATALOG_API_BASE_URL"), option_env!("CATALOG_ORGANIZATION_ID"))
    }

    fn from_values(base_url: Option<&str>, organization_id: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL)),
            fallback_organization_id: parse_organization_id(organization_id),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn parse_organization_id(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|id| *id > 0)
        .unwrap_or(DEFAULT_ORGANIZATION_ID)
}
