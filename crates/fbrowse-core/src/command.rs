//! Command table for fbrowse.
//!
//! Every [`Command`] a frontend can issue has a [`CommandDescriptor`]
//! carrying its metadata (id, name, description, category, usage) and an
//! argument parser. [`CommandRegistry`] looks commands up by id or alias,
//! parses text lines into commands, and fuzzy-searches descriptors for a
//! command palette.

use std::path::PathBuf;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::error::{CoreError, CoreResult};
use crate::event::Command;

/// Broad category for grouping commands in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    Navigation,
    FileOps,
    Clipboard,
    View,
}

impl CommandCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::FileOps => "File",
            Self::Clipboard => "Clipboard",
            Self::View => "View",
        }
    }
}

/// Builds a [`Command`] from parsed arguments, or `None` if they don't fit.
pub type ArgParser = fn(&[String]) -> Option<Command>;

/// Metadata and argument parser for a single command.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    /// Snake-case identifier typed at the prompt (e.g. `"create_directory"`).
    pub id: &'static str,
    /// Short alternative spellings (e.g. `"mkdir"`).
    pub aliases: &'static [&'static str],
    /// Human-readable name shown in the palette.
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    /// Argument synopsis, e.g. `"<path> <new_name>"`.
    pub usage: &'static str,
    pub parse: ArgParser,
}

impl CommandDescriptor {
    /// Full usage line: id followed by the argument synopsis.
    pub fn usage_line(&self) -> String {
        if self.usage.is_empty() {
            self.id.to_string()
        } else {
            format!("{} {}", self.id, self.usage)
        }
    }

    fn answers_to(&self, word: &str) -> bool {
        self.id == word || self.aliases.iter().any(|a| *a == word)
    }
}

fn one_path(args: &[String]) -> Option<PathBuf> {
    match args {
        [p] => Some(PathBuf::from(p)),
        _ => None,
    }
}

fn one_name(args: &[String]) -> Option<String> {
    match args {
        [n] => Some(n.clone()),
        _ => None,
    }
}

fn paths(args: &[String]) -> Option<Vec<PathBuf>> {
    if args.is_empty() {
        None
    } else {
        Some(args.iter().map(PathBuf::from).collect())
    }
}

/// Registry of all available commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    descriptors: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Builds the registry containing every known command.
    pub fn new() -> Self {
        let descriptors = vec![
            // Navigation
            CommandDescriptor {
                id: "navigate",
                aliases: &["cd"],
                name: "Navigate",
                description: "Go to a directory",
                category: CommandCategory::Navigation,
                usage: "<path>",
                parse: |a| one_path(a).map(Command::Navigate),
            },
            CommandDescriptor {
                id: "go_up",
                aliases: &["up", ".."],
                name: "Go Up",
                description: "Go to the parent directory",
                category: CommandCategory::Navigation,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::GoUp),
            },
            CommandDescriptor {
                id: "go_back",
                aliases: &["back"],
                name: "Go Back",
                description: "Return to the previous directory in history",
                category: CommandCategory::Navigation,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::GoBack),
            },
            CommandDescriptor {
                id: "go_forward",
                aliases: &["forward"],
                name: "Go Forward",
                description: "Redo a Go Back",
                category: CommandCategory::Navigation,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::GoForward),
            },
            CommandDescriptor {
                id: "refresh",
                aliases: &["ls"],
                name: "Refresh",
                description: "Re-read the current directory",
                category: CommandCategory::Navigation,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::Refresh),
            },
            CommandDescriptor {
                id: "open",
                aliases: &[],
                name: "Open",
                description: "Enter a directory or open a file with its default application",
                category: CommandCategory::Navigation,
                usage: "<path>",
                parse: |a| one_path(a).map(Command::Open),
            },
            // View
            CommandDescriptor {
                id: "search",
                aliases: &["find"],
                name: "Search",
                description: "Show entries whose name contains the term",
                category: CommandCategory::View,
                usage: "<term>",
                parse: |a| (!a.is_empty()).then(|| Command::Search(a.join(" "))),
            },
            CommandDescriptor {
                id: "clear_search",
                aliases: &[],
                name: "Clear Search",
                description: "Show the full listing again",
                category: CommandCategory::View,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::ClearSearch),
            },
            CommandDescriptor {
                id: "toggle_hidden",
                aliases: &["hidden"],
                name: "Toggle Hidden Files",
                description: "Show or hide dot files",
                category: CommandCategory::View,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::ToggleHidden),
            },
            // Clipboard
            CommandDescriptor {
                id: "copy",
                aliases: &["yank"],
                name: "Copy",
                description: "Stage files for copying",
                category: CommandCategory::Clipboard,
                usage: "<path>...",
                parse: |a| paths(a).map(Command::StageCopy),
            },
            CommandDescriptor {
                id: "cut",
                aliases: &[],
                name: "Cut",
                description: "Stage files for moving",
                category: CommandCategory::Clipboard,
                usage: "<path>...",
                parse: |a| paths(a).map(Command::StageCut),
            },
            CommandDescriptor {
                id: "paste",
                aliases: &[],
                name: "Paste",
                description: "Paste staged files into the current directory",
                category: CommandCategory::Clipboard,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::Paste),
            },
            CommandDescriptor {
                id: "clear_clipboard",
                aliases: &[],
                name: "Clear Clipboard",
                description: "Forget staged files",
                category: CommandCategory::Clipboard,
                usage: "",
                parse: |a| a.is_empty().then_some(Command::ClearClipboard),
            },
            // File Operations
            CommandDescriptor {
                id: "create_file",
                aliases: &["touch"],
                name: "New File",
                description: "Create an empty file",
                category: CommandCategory::FileOps,
                usage: "<name>",
                parse: |a| one_name(a).map(Command::CreateFile),
            },
            CommandDescriptor {
                id: "create_directory",
                aliases: &["mkdir"],
                name: "New Directory",
                description: "Create a directory, including missing parents",
                category: CommandCategory::FileOps,
                usage: "<name>",
                parse: |a| one_name(a).map(Command::CreateDirectory),
            },
            CommandDescriptor {
                id: "rename",
                aliases: &["mv"],
                name: "Rename",
                description: "Rename a file or directory",
                category: CommandCategory::FileOps,
                usage: "<path> <new_name>",
                parse: |a| match a {
                    [p, n] => Some(Command::Rename(PathBuf::from(p), n.clone())),
                    _ => None,
                },
            },
            CommandDescriptor {
                id: "delete",
                aliases: &["rm"],
                name: "Delete",
                description: "Delete files and empty directories",
                category: CommandCategory::FileOps,
                usage: "<path>...",
                parse: |a| paths(a).map(Command::Delete),
            },
            CommandDescriptor {
                id: "delete_recursive",
                aliases: &["rm-r"],
                name: "Delete Recursively",
                description: "Delete directories together with their contents",
                category: CommandCategory::FileOps,
                usage: "<path>...",
                parse: |a| paths(a).map(Command::DeleteRecursive),
            },
        ];
        Self { descriptors }
    }

    /// Returns all registered descriptors.
    pub fn all(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    /// Finds a descriptor by id or alias.
    pub fn find_by_id(&self, id: &str) -> Option<&CommandDescriptor> {
        self.descriptors.iter().find(|d| d.answers_to(id))
    }

    /// Fuzzy-searches descriptors by matching against name, description, and id.
    /// Returns results sorted by match score (best first).
    pub fn fuzzy_search(&self, query: &str) -> Vec<&CommandDescriptor> {
        if query.is_empty() {
            return self.descriptors.iter().collect();
        }
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &CommandDescriptor)> = self
            .descriptors
            .iter()
            .filter_map(|d| {
                let name_score = matcher.fuzzy_match(d.name, query).unwrap_or(0);
                let desc_score = matcher.fuzzy_match(d.description, query).unwrap_or(0);
                let id_score = matcher.fuzzy_match(d.id, query).unwrap_or(0);
                let best = name_score.max(desc_score).max(id_score);
                (best > 0).then_some((best, d))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, d)| d).collect()
    }

    /// Parses a text line such as `rename "old name.txt" new.txt`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnknownCommand`] if the first word names no command.
    /// - [`CoreError::Usage`] for an empty line, an unterminated quote, or
    ///   arguments the command does not accept.
    pub fn parse(&self, line: &str) -> CoreResult<Command> {
        let mut words = split_args(line)?.into_iter();
        let Some(head) = words.next() else {
            return Err(CoreError::Usage("<command> [args...]".to_string()));
        };
        let descriptor = self
            .find_by_id(&head)
            .ok_or_else(|| CoreError::UnknownCommand(head.clone()))?;
        let args: Vec<String> = words.collect();
        (descriptor.parse)(&args).ok_or_else(|| CoreError::Usage(descriptor.usage_line()))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits on whitespace, honouring single and double quotes.
fn split_args(line: &str) -> CoreResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CoreError::Usage("unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_command() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.all().len(), 18);
    }

    #[test]
    fn ids_and_aliases_are_unique() {
        let registry = CommandRegistry::new();
        let mut seen = std::collections::HashSet::new();
        for d in registry.all() {
            assert!(seen.insert(d.id), "duplicate id {}", d.id);
            for alias in d.aliases {
                assert!(seen.insert(*alias), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn find_by_id_accepts_aliases() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.find_by_id("mkdir").unwrap().id, "create_directory");
        assert_eq!(registry.find_by_id("delete").unwrap().id, "delete");
        assert!(registry.find_by_id("nonexistent").is_none());
    }

    #[test]
    fn parse_simple_commands() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.parse("up").unwrap(), Command::GoUp);
        assert_eq!(
            registry.parse("cd /tmp").unwrap(),
            Command::Navigate(PathBuf::from("/tmp"))
        );
        assert_eq!(
            registry.parse("  mkdir   a/b/c  ").unwrap(),
            Command::CreateDirectory("a/b/c".into())
        );
    }

    #[test]
    fn parse_quoted_arguments() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.parse(r#"rename "old name.txt" 'new name.txt'"#).unwrap(),
            Command::Rename(PathBuf::from("old name.txt"), "new name.txt".into())
        );
    }

    #[test]
    fn parse_multi_path_commands() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.parse("rm a.txt b.txt").unwrap(),
            Command::Delete(vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")])
        );
        assert_eq!(
            registry.parse("search two words").unwrap(),
            Command::Search("two words".into())
        );
    }

    #[test]
    fn parse_unknown_command() {
        let registry = CommandRegistry::new();
        assert!(matches!(
            registry.parse("frobnicate x"),
            Err(CoreError::UnknownCommand(name)) if name == "frobnicate"
        ));
    }

    #[test]
    fn parse_wrong_arity_reports_usage() {
        let registry = CommandRegistry::new();
        let err = registry.parse("rename only-one").unwrap_err();
        assert_eq!(err.to_string(), "usage: rename <path> <new_name>");
        assert!(matches!(registry.parse("up now"), Err(CoreError::Usage(_))));
        assert!(matches!(registry.parse("copy"), Err(CoreError::Usage(_))));
    }

    #[test]
    fn parse_empty_and_unterminated() {
        let registry = CommandRegistry::new();
        assert!(matches!(registry.parse("   "), Err(CoreError::Usage(_))));
        assert!(matches!(
            registry.parse("touch \"open"),
            Err(CoreError::Usage(_))
        ));
    }

    #[test]
    fn empty_quotes_produce_empty_argument() {
        assert_eq!(split_args(r#"touch """#).unwrap(), vec!["touch", ""]);
    }

    #[test]
    fn fuzzy_search_empty_query_returns_all() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.fuzzy_search("").len(), registry.all().len());
    }

    #[test]
    fn fuzzy_search_finds_matching_commands() {
        let registry = CommandRegistry::new();
        let results = registry.fuzzy_search("paste");
        assert!(!results.is_empty());
        assert_eq!(results[0].id, "paste");
    }

    #[test]
    fn fuzzy_search_no_match() {
        let registry = CommandRegistry::new();
        assert!(registry.fuzzy_search("zzzzxxxxxqqq").is_empty());
    }

    #[test]
    fn category_labels() {
        assert_eq!(CommandCategory::FileOps.label(), "File");
        assert_eq!(CommandCategory::Clipboard.label(), "Clipboard");
    }
}
