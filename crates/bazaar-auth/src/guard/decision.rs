//! Route guard outcomes.

use serde::Serialize;

use crate::permission::Permission;

/// Why navigation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "permission", rename_all = "snake_case")]
pub enum DenialReason {
    /// No authenticated session.
    Unauthenticated,
    /// The route is restricted to super admins.
    SuperAdminRequired,
    /// The session lacks the route's permission.
    MissingPermission(Permission),
}

/// What the dashboard shows instead of a denied view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialOutcome {
    /// Navigate to this path instead.
    Redirect(String),
    /// Render the access-denied view in place.
    AccessDenied,
}

/// A refused navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denial {
    /// Why.
    pub reason: DenialReason,
    /// What to show instead.
    pub outcome: DenialOutcome,
}

/// Result of guarding a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GuardDecision {
    /// The session is still being read; show a placeholder.
    Loading,
    /// The view may not be rendered.
    Denied(Denial),
    /// Render the view.
    Granted,
}

impl GuardDecision {
    /// Whether the view renders.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// The redirect target, when the decision is a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Denied(Denial {
                outcome: DenialOutcome::Redirect(to),
                ..
            }) => Some(to),
            _ => None,
        }
    }
}
