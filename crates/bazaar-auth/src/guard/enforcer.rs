//! The route guard state machine.
//!
//! Checks run in a fixed order and the first match wins:
//! loading, unauthenticated, super-admin requirement, required permission.

use bazaar_core::config::{DenialBehavior, GuardConfig};

use crate::session::{Session, SessionProvider, SessionState};

use super::decision::{Denial, DenialOutcome, DenialReason, GuardDecision};
use super::route::RouteDeclaration;

/// Decides whether a protected view renders.
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    config: GuardConfig,
}

impl RouteGuard {
    /// Creates a guard with the given redirect targets and denial behavior.
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// The guard's configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Guards `route` against the provider's current state.
    ///
    /// Does not read the store; call [`SessionProvider::resolve`] to leave
    /// the loading state.
    pub fn check(&self, route: &RouteDeclaration, provider: &SessionProvider) -> GuardDecision {
        self.evaluate(route, &provider.state())
    }

    /// Guards `route` against an explicit session state.
    pub fn evaluate(&self, route: &RouteDeclaration, state: &SessionState) -> GuardDecision {
        match state {
            SessionState::Loading => GuardDecision::Loading,
            SessionState::Resolved(session) => self.decide(route, session),
        }
    }

    /// Guards `route` for a resolved session.
    pub fn decide(&self, route: &RouteDeclaration, session: &Session) -> GuardDecision {
        if !session.is_authenticated {
            tracing::debug!(route = %route.path, "Unauthenticated navigation");
            return GuardDecision::Denied(Denial {
                reason: DenialReason::Unauthenticated,
                outcome: DenialOutcome::Redirect(self.config.login_path.clone()),
            });
        }

        let eval = session.evaluator();

        if route.require_super_admin && !eval.is_super_admin() {
            return self.deny(route, DenialReason::SuperAdminRequired);
        }

        if !route.exempt {
            if let Some(permission) = route.required_permission {
                if !eval.has_permission(permission) {
                    return self.deny(route, DenialReason::MissingPermission(permission));
                }
            }
        }

        GuardDecision::Granted
    }

    fn deny(&self, route: &RouteDeclaration, reason: DenialReason) -> GuardDecision {
        tracing::debug!(route = %route.path, ?reason, "Navigation denied");
        let outcome = match self.config.on_denied {
            DenialBehavior::Redirect => DenialOutcome::Redirect(self.config.landing_path.clone()),
            DenialBehavior::AccessDenied => DenialOutcome::AccessDenied,
        };
        GuardDecision::Denied(Denial { reason, outcome })
    }
}
