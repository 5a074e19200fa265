//! Route guard configuration.

use serde::{Deserialize, Serialize};

/// What a denied navigation resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialBehavior {
    /// Silently redirect to the landing page.
    #[default]
    Redirect,
    /// Render an explicit access-denied view in place of the route.
    AccessDenied,
}

/// Route guard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Default authenticated landing page; target of permission denials.
    #[serde(default = "default_landing_path")]
    pub landing_path: String,
    /// Login page; target only when there is no authenticated session.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Outcome of a permission denial.
    #[serde(default)]
    pub on_denied: DenialBehavior,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            landing_path: default_landing_path(),
            login_path: default_login_path(),
            on_denied: DenialBehavior::default(),
        }
    }
}

fn default_landing_path() -> String {
    "/dashboard".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}
