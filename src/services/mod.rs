//! Browser implementations of the console collaborators.
//!
//! - [`OllamaClient`] - completion via the `/api/ollama/generate` proxy
//! - [`LocalInquiryStore`] - inquiries appended to localStorage
//! - [`ConfirmAdminGate`] - admin elevation behind a confirm dialog
//! - [`BrowserDelay`] - timers via `gloo-timers`
//! - [`load_site_config`] - display strings from `/api/get-config`

mod admin;
mod inquiries;
mod ollama;
mod site;
mod timer;

use std::rc::Rc;

pub use admin::ConfirmAdminGate;
pub use inquiries::LocalInquiryStore;
pub use ollama::OllamaClient;
pub use site::load_site_config;
pub use timer::BrowserDelay;

use crate::core::Services;
use crate::models::SiteConfig;

/// Collaborators for a console running in the browser.
pub fn browser_services(config: &SiteConfig) -> Services {
    Services {
        completion: Rc::new(OllamaClient::default()),
        sink: Rc::new(LocalInquiryStore::default()),
        admin: Rc::new(ConfirmAdminGate::new(config.admin_enabled)),
        delay: Rc::new(BrowserDelay),
    }
}
