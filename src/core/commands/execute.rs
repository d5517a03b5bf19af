//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::ASCII_LOGO;
use crate::core::VirtualFs;
use crate::models::{OutputLine, SiteConfig, VirtualPath};
use crate::utils::format::format_listing;

use super::{Command, CommandResult, CommandTable, Effect, PathArg};

/// Read-only view of the console a command runs against.
#[derive(Clone, Copy)]
pub struct ExecContext<'a> {
    pub fs: &'a VirtualFs,
    pub cwd: &'a VirtualPath,
    pub commands: &'a CommandTable,
    pub config: &'a SiteConfig,
}

/// Execute a parsed command.
///
/// Execution never mutates the console directly: state changes come back
/// as an [`Effect`] for the caller to apply.
pub fn execute_command(cmd: Command, ctx: ExecContext<'_>) -> CommandResult {
    let messages = &ctx.config.messages;

    match cmd {
        Command::Ls(path) => execute_ls(path, ctx),
        Command::Cd(path) => execute_cd(path, ctx),
        Command::Cat(file) => execute_cat(file, ctx),
        Command::Help => CommandResult::output(ctx.commands.help_lines(&messages.help_header)),
        Command::About => CommandResult::output(vec![
            OutputLine::success(ASCII_LOGO),
            OutputLine::success(&ctx.config.tagline),
        ]),
        Command::Clear => CommandResult::effect(Effect::ClearLog),
        Command::Inquiry => {
            CommandResult::output(vec![OutputLine::success(&messages.inquiry_banner)])
                .with_effect(Effect::StartInquiry)
        }
        Command::Admin => CommandResult::effect(Effect::RequestAdmin),
        Command::Prompt(text) => CommandResult::effect(Effect::Complete(text)),
    }
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, ctx: ExecContext<'_>) -> CommandResult {
    let target = match path {
        Some(p) => ctx.fs.navigate(ctx.cwd, p.as_str()),
        None => Some(ctx.cwd.clone()),
    };

    match target.as_ref().and_then(|t| ctx.fs.list_dir(t)) {
        Some(entries) => CommandResult::output(
            entries
                .iter()
                .map(|entry| OutputLine::info(format_listing(&entry.name, entry.is_dir)))
                .collect(),
        ),
        None => CommandResult::output(vec![OutputLine::error(
            &ctx.config.messages.path_not_found,
        )]),
    }
}

/// Execute `cd` command.
fn execute_cd(path: Option<PathArg>, ctx: ExecContext<'_>) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::effect(Effect::Navigate(VirtualPath::root()));
    };

    match ctx.fs.navigate(ctx.cwd, path.as_str()) {
        Some(new_path) => CommandResult::effect(Effect::Navigate(new_path)),
        None => CommandResult::output(vec![OutputLine::error(
            &ctx.config.messages.path_not_found,
        )]),
    }
}

/// Execute `cat` command.
fn execute_cat(file: Option<PathArg>, ctx: ExecContext<'_>) -> CommandResult {
    let content = file
        .as_ref()
        .and_then(|f| ctx.fs.read_path(ctx.cwd, f.as_str()));

    match content {
        Some(text) => CommandResult::output(vec![OutputLine::success(text)]),
        None => CommandResult::output(vec![OutputLine::error(
            &ctx.config.messages.file_not_found,
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;

    struct Fixture {
        fs: VirtualFs,
        commands: CommandTable,
        config: SiteConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                fs: VirtualFs::bundled(),
                commands: CommandTable::default(),
                config: SiteConfig::default(),
            }
        }

        fn run(&self, input: &str, cwd: &VirtualPath) -> CommandResult {
            let ctx = ExecContext {
                fs: &self.fs,
                cwd,
                commands: &self.commands,
                config: &self.config,
            };
            execute_command(Command::parse(input, &self.commands), ctx)
        }
    }

    fn projects() -> VirtualPath {
        VirtualPath::root().join("projects")
    }

    fn texts(result: &CommandResult) -> Vec<&str> {
        result.output.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_ls_root() {
        let fx = Fixture::new();
        let result = fx.run("ls", &VirtualPath::root());
        assert_eq!(
            texts(&result),
            vec![
                "<DIR> projects",
                "      about.txt",
                "      mission.txt",
                "      secret.txt",
            ]
        );
        assert!(result.output.iter().all(|l| l.kind == LineKind::Info));
        assert_eq!(result.effect, None);
    }

    #[test]
    fn test_ls_with_path() {
        let fx = Fixture::new();
        let result = fx.run("dir projects", &VirtualPath::root());
        assert_eq!(
            texts(&result),
            vec!["      cloud_arch.doc", "      dapps.doc", "      neural_core.doc"]
        );
    }

    #[test]
    fn test_ls_missing_path() {
        let fx = Fixture::new();
        let result = fx.run("ls nowhere", &VirtualPath::root());
        assert_eq!(texts(&result), vec!["ERR: PATH NOT FOUND"]);
        assert_eq!(result.output[0].kind, LineKind::Error);
    }

    #[test]
    fn test_cd_variants() {
        let fx = Fixture::new();
        let root = VirtualPath::root();

        assert_eq!(
            fx.run("cd projects", &root).effect,
            Some(Effect::Navigate(projects()))
        );
        assert_eq!(fx.run("cd", &projects()).effect, Some(Effect::Navigate(root.clone())));
        assert_eq!(fx.run("cd /", &projects()).effect, Some(Effect::Navigate(root.clone())));
        assert_eq!(fx.run("cd ..", &projects()).effect, Some(Effect::Navigate(root.clone())));
        assert_eq!(fx.run("cd ..", &root).effect, Some(Effect::Navigate(root.clone())));
    }

    #[test]
    fn test_cd_invalid_target() {
        let fx = Fixture::new();
        for target in ["cd nowhere", "cd about.txt"] {
            let result = fx.run(target, &VirtualPath::root());
            assert_eq!(result.effect, None);
            assert_eq!(texts(&result), vec!["ERR: PATH NOT FOUND"]);
        }
    }

    #[test]
    fn test_cat_file() {
        let fx = Fixture::new();
        let result = fx.run("cat mission.txt", &VirtualPath::root());
        assert_eq!(
            texts(&result),
            vec!["Our mission is to engineer trajectories, not just software."]
        );
        assert_eq!(result.output[0].kind, LineKind::Success);

        let result = fx.run("cat dapps.doc", &projects());
        assert_eq!(texts(&result), vec!["Decentralized Applications engine v0.9"]);
    }

    #[test]
    fn test_cat_directory_or_missing_is_not_found() {
        let fx = Fixture::new();
        for input in ["cat projects", "cat", "cat nothing.txt", "cat /"] {
            let result = fx.run(input, &VirtualPath::root());
            assert_eq!(texts(&result), vec!["ERR: FILE NOT FOUND"], "input: {}", input);
            assert_eq!(result.output[0].kind, LineKind::Error);
        }
    }

    #[test]
    fn test_about() {
        let fx = Fixture::new();
        let result = fx.run("about", &VirtualPath::root());
        assert_eq!(result.output.len(), 2);
        assert!(result.output[0].text.contains("VECTOR NINE [SYSTEM-09]"));
        assert_eq!(
            result.output[1].text,
            "VECTOR NINE: ADDING PRECISE DIRECTION TO VISION."
        );
    }

    #[test]
    fn test_effects() {
        let fx = Fixture::new();
        let root = VirtualPath::root();

        assert_eq!(fx.run("clear", &root).effect, Some(Effect::ClearLog));
        assert_eq!(fx.run("sudo", &root).effect, Some(Effect::RequestAdmin));
        assert_eq!(
            fx.run("random text", &root).effect,
            Some(Effect::Complete("random text".to_string()))
        );

        let inquiry = fx.run("inquiry", &root);
        assert_eq!(inquiry.effect, Some(Effect::StartInquiry));
        assert_eq!(texts(&inquiry), vec!["--- PROJECT INQUIRY PROTOCOL ---"]);
    }

    #[test]
    fn test_messages_come_from_config() {
        let mut fx = Fixture::new();
        fx.config.messages.file_not_found = "NO SUCH FILE".to_string();
        let result = fx.run("cat ghost", &VirtualPath::root());
        assert_eq!(texts(&result), vec!["NO SUCH FILE"]);
    }
}
