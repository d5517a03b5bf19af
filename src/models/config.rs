//! Site configuration: the display strings injected into the console.
//!
//! Every field carries a default, so a remote config may supply any subset
//! (or nothing at all) and the console still renders sensible text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CommandKind, InquiryField};

/// Response body of the config endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub config: Option<SiteConfig>,
}

/// Display strings and console behavior switches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Page title shown above the console
    pub title: String,
    /// Console window label, rendered as `{shell_name}_{path}`
    pub shell_name: String,
    /// Prompt prefix while idle, rendered as `{prompt_user}:{path}$`
    pub prompt_user: String,
    /// Prompt shown while the inquiry wizard collects answers
    pub form_prompt: String,
    /// Identity line printed by `about`
    pub tagline: String,
    /// Lines printed when the console starts, in order
    pub boot_lines: Vec<String>,
    /// Style instructions handed to the completion service
    pub system_prompt: String,
    /// Label of the host button that starts an inquiry
    pub inquiry_button: String,
    /// Questions asked by the inquiry wizard, in order
    pub inquiry_fields: Vec<InquiryField>,
    /// Command table override (name -> command). `None` keeps the default table.
    pub commands: Option<BTreeMap<String, CommandKind>>,
    /// Whether `admin`/`sudo` may be granted at all
    pub admin_enabled: bool,
    pub messages: ConsoleMessages,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "VECTOR NINE".to_string(),
            shell_name: "v9_shell".to_string(),
            prompt_user: "v9@user".to_string(),
            form_prompt: "[FORM_INPUT]:".to_string(),
            tagline: "VECTOR NINE: ADDING PRECISE DIRECTION TO VISION.".to_string(),
            boot_lines: vec![
                "V9_OS KERNEL LOADING...".to_string(),
                "SYSTEM CHECK... [STABLE]".to_string(),
                "TYPE 'help' FOR COMMANDS OR 'inquiry' TO START PROJECT LOG.".to_string(),
            ],
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            inquiry_button: "START INQUIRY".to_string(),
            inquiry_fields: default_inquiry_fields(),
            commands: None,
            admin_enabled: false,
            messages: ConsoleMessages::default(),
        }
    }
}

impl SiteConfig {
    /// Replace degenerate values with defaults.
    ///
    /// An empty field list would leave the wizard nothing to ask.
    pub fn normalized(mut self) -> Self {
        if self.inquiry_fields.is_empty() {
            self.inquiry_fields = default_inquiry_fields();
        }
        self
    }

    /// Prompt text for the given working directory.
    pub fn prompt(&self, path: &str) -> String {
        format!("{}:{}$", self.prompt_user, path)
    }
}

/// Messages printed by the console's command handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleMessages {
    pub help_header: String,
    pub path_not_found: String,
    pub file_not_found: String,
    pub connection_error: String,
    pub no_data: String,
    pub permission_denied: String,
    pub admin_granted: String,
    pub inquiry_banner: String,
    pub inquiry_recording: String,
    pub inquiry_success: String,
}

impl Default for ConsoleMessages {
    fn default() -> Self {
        Self {
            help_header: "AVAILABLE PROTOCOLS:".to_string(),
            path_not_found: "ERR: PATH NOT FOUND".to_string(),
            file_not_found: "ERR: FILE NOT FOUND".to_string(),
            connection_error: "CONNECTION ERROR.".to_string(),
            no_data: "NO DATA.".to_string(),
            permission_denied: "ERR: PERMISSION DENIED".to_string(),
            admin_granted: "ADMIN ACCESS GRANTED.".to_string(),
            inquiry_banner: "--- PROJECT INQUIRY PROTOCOL ---".to_string(),
            inquiry_recording: "데이터 기록 중...".to_string(),
            inquiry_success: "프로젝트 인콰이어리가 성공적으로 기록되었습니다.".to_string(),
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = "You are the Vector Nine OS Terminal Agent.
Company Name: Vector Nine (벡터 나인)
Slogan: \"비전에 정확한 방향을 더하다\"
Nature: Engineering-first IT company. Respond in Korean.
Style: Professional, concise, DOS terminal. Max 3 sentences.";

fn default_inquiry_fields() -> Vec<InquiryField> {
    vec![
        InquiryField::new("name", "성함을 입력해주십시오."),
        InquiryField::new("contact", "연락처를 입력해주세요."),
        InquiryField::new("details", "상세 내용을 입력해주세요."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"title": "V9", "messages": {"noData": "EMPTY."}}"#,
        )
        .unwrap();

        assert_eq!(config.title, "V9");
        assert_eq!(config.messages.no_data, "EMPTY.");
        assert_eq!(config.messages.file_not_found, "ERR: FILE NOT FOUND");
        assert_eq!(config.prompt_user, "v9@user");
    }

    #[test]
    fn test_command_override() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"commands": {"ls": "ls", "sudo": "admin"}}"#).unwrap();
        let commands = config.commands.unwrap();

        assert_eq!(commands.get("sudo"), Some(&CommandKind::Admin));
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_normalized_restores_fields() {
        let config: SiteConfig = serde_json::from_str(r#"{"inquiryFields": []}"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.inquiry_fields.len(), 3);
        assert_eq!(config.inquiry_fields[0].key, "name");
    }

    #[test]
    fn test_envelope() {
        let envelope: ConfigEnvelope =
            serde_json::from_str(r#"{"success": true, "config": {"adminEnabled": true}}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.config.unwrap().admin_enabled);
    }

    #[test]
    fn test_korean_defaults() {
        let config = SiteConfig::default();
        assert!(config.system_prompt.contains("Respond in Korean."));
        assert!(config.system_prompt.contains("비전에 정확한 방향을 더하다"));
        assert_eq!(config.inquiry_fields[0].prompt, "성함을 입력해주십시오.");
        assert_eq!(config.inquiry_fields[2].prompt, "상세 내용을 입력해주세요.");
        assert_eq!(config.messages.inquiry_recording, "데이터 기록 중...");
    }

    #[test]
    fn test_prompt() {
        let config = SiteConfig::default();
        assert_eq!(config.prompt("/projects"), "v9@user:/projects$");
    }
}
