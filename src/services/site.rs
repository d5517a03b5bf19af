//! Site configuration loading.

use crate::config::{CONFIG_URL, FETCH_TIMEOUT_MS};
use crate::core::error::FetchError;
use crate::models::{ConfigEnvelope, SiteConfig};
use crate::utils::net::get_json;

/// Fetch the site configuration, falling back to defaults on any failure.
pub async fn load_site_config() -> SiteConfig {
    config_from_response(get_json::<ConfigEnvelope>(CONFIG_URL, FETCH_TIMEOUT_MS).await)
}

fn config_from_response(response: Result<ConfigEnvelope, FetchError>) -> SiteConfig {
    let config = match response {
        Ok(ConfigEnvelope {
            success: true,
            config: Some(config),
        }) => config,
        Ok(_) => {
            log::warn!("Config endpoint reported no config, using defaults");
            SiteConfig::default()
        }
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            SiteConfig::default()
        }
    };
    config.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_envelope() {
        let envelope: ConfigEnvelope = serde_json::from_str(
            r#"{"success": true, "config": {"title": "ORBIT", "adminEnabled": true}}"#,
        )
        .unwrap();
        let config = config_from_response(Ok(envelope));
        assert_eq!(config.title, "ORBIT");
        assert!(config.admin_enabled);
        assert_eq!(config.prompt_user, "v9@user");
    }

    #[test]
    fn test_unsuccessful_envelope_uses_defaults() {
        let envelope: ConfigEnvelope =
            serde_json::from_str(r#"{"success": false, "config": {"title": "IGNORED"}}"#).unwrap();
        assert_eq!(config_from_response(Ok(envelope)), SiteConfig::default());
    }

    #[test]
    fn test_fetch_error_uses_defaults() {
        let config = config_from_response(Err(FetchError::HttpError(500)));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_empty_field_list_is_restored() {
        let envelope: ConfigEnvelope =
            serde_json::from_str(r#"{"success": true, "config": {"inquiryFields": []}}"#).unwrap();
        let config = config_from_response(Ok(envelope));
        assert_eq!(config.inquiry_fields.len(), 3);
    }
}
