//! Admin elevation gate.

use async_trait::async_trait;

use crate::core::{AdminDecision, AdminGate};
use crate::utils::dom;

const CONFIRM_MESSAGE: &str = "Enter admin session for this console?";

/// Grants admin access when enabled by config and confirmed by the user.
#[derive(Clone, Debug)]
pub struct ConfirmAdminGate {
    enabled: bool,
}

impl ConfirmAdminGate {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait(?Send)]
impl AdminGate for ConfirmAdminGate {
    async fn request_admin_access(&self) -> AdminDecision {
        if !self.enabled {
            log::info!("Admin access requested but disabled by config");
            return AdminDecision::Denied;
        }
        if dom::confirm(CONFIRM_MESSAGE) {
            AdminDecision::Granted
        } else {
            AdminDecision::Denied
        }
    }
}
