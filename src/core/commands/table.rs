//! Configurable mapping from typed command names to built-in commands.

use std::collections::BTreeMap;

use crate::models::{CommandKind, OutputLine};

/// Names the console recognizes, in declaration order.
///
/// Lookups are case-insensitive; anything not in the table is forwarded to
/// the completion service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<(String, CommandKind)>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::from_pairs([
            ("help", CommandKind::Help),
            ("about", CommandKind::About),
            ("ls", CommandKind::Ls),
            ("dir", CommandKind::Ls),
            ("cd", CommandKind::Cd),
            ("cat", CommandKind::Cat),
            ("clear", CommandKind::Clear),
            ("inquiry", CommandKind::Inquiry),
            ("admin", CommandKind::Admin),
            ("sudo", CommandKind::Admin),
        ])
    }
}

impl CommandTable {
    /// Build a table from `(name, command)` pairs. Later duplicates are ignored.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, CommandKind)>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, CommandKind)> = Vec::new();
        for (name, kind) in pairs {
            let name = name.as_ref().trim().to_lowercase();
            if !name.is_empty() && !entries.iter().any(|(n, _)| *n == name) {
                entries.push((name, kind));
            }
        }
        Self { entries }
    }

    /// Table from a config override, or the default table when absent.
    pub fn from_config(overrides: Option<&BTreeMap<String, CommandKind>>) -> Self {
        match overrides {
            Some(map) => Self::from_pairs(map.iter().map(|(name, kind)| (name, *kind))),
            None => Self::default(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<CommandKind> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }

    /// All names bound to `kind`, in table order.
    pub fn aliases(&self, kind: CommandKind) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Lines printed by `help`.
    pub fn help_lines(&self, header: &str) -> Vec<OutputLine> {
        let mut lines = vec![OutputLine::info(header)];
        for kind in CommandKind::HELP_ORDER {
            let aliases = self.aliases(kind);
            let Some((usage, description)) = kind.help_entry() else {
                continue;
            };
            if aliases.is_empty() {
                continue;
            }
            let text = format!("{}{} - {}", aliases.join("/"), usage, description);
            if kind == CommandKind::Inquiry {
                lines.push(OutputLine::success(text));
            } else {
                lines.push(OutputLine::info(text));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;

    #[test]
    fn test_default_lookup_case_insensitive() {
        let table = CommandTable::default();
        assert_eq!(table.lookup("LS"), Some(CommandKind::Ls));
        assert_eq!(table.lookup("Dir"), Some(CommandKind::Ls));
        assert_eq!(table.lookup("sudo"), Some(CommandKind::Admin));
        assert_eq!(table.lookup("whoami"), None);
    }

    #[test]
    fn test_aliases_keep_order() {
        let table = CommandTable::default();
        assert_eq!(table.aliases(CommandKind::Ls), vec!["ls", "dir"]);
        assert_eq!(table.aliases(CommandKind::Admin), vec!["admin", "sudo"]);
    }

    #[test]
    fn test_from_pairs_normalizes_and_dedups() {
        let table = CommandTable::from_pairs([
            (" LS ", CommandKind::Ls),
            ("ls", CommandKind::Cat),
            ("", CommandKind::Help),
        ]);
        assert_eq!(table.lookup("ls"), Some(CommandKind::Ls));
        assert_eq!(table.aliases(CommandKind::Help), Vec::<&str>::new());
    }

    #[test]
    fn test_from_config_override_replaces_table() {
        let mut map = BTreeMap::new();
        map.insert("list".to_string(), CommandKind::Ls);
        let table = CommandTable::from_config(Some(&map));

        assert_eq!(table.lookup("list"), Some(CommandKind::Ls));
        assert_eq!(table.lookup("ls"), None);
        assert_eq!(CommandTable::from_config(None), CommandTable::default());
    }

    #[test]
    fn test_help_lines_default() {
        let lines = CommandTable::default().help_lines("AVAILABLE PROTOCOLS:");
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "AVAILABLE PROTOCOLS:",
                "ls/dir - List data",
                "cd [dir] - Nav directory",
                "cat [file] - Read data",
                "inquiry - Start project consultation",
                "about - System meta",
                "clear - Flush buffer",
            ]
        );
        assert_eq!(lines[4].kind, LineKind::Success);
    }

    #[test]
    fn test_help_lines_skip_missing_commands() {
        let table = CommandTable::from_pairs([("help", CommandKind::Help), ("ls", CommandKind::Ls)]);
        let lines = table.help_lines("CMDS");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "ls - List data");
    }
}
