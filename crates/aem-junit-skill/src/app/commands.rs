use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap::error::ContextKind;
use clap::error::ContextValue;
use clap::error::ErrorKind;
pub use clap_complete::Shell;

use crate::bundle::BUNDLE_DIR_ENV;

const LONG_ABOUT: &str = r#"Guides, Maven configuration and JUnit 5 test templates for AEM projects.

Everything is printed to stdout, so output can be redirected straight into
a project:

    aem-junit-skill config > pom.xml
    aem-junit-skill template model HeroComponent > src/test/java/com/example/core/models/HeroComponentTest.java

Running without a command is the same as 'aem-junit-skill help'."#;

#[derive(Parser)]
#[command(name = "aem-junit-skill")]
#[command(author, version, propagate_version = true)]
#[command(about = "Guides, Maven configuration and JUnit 5 test templates for AEM projects")]
#[command(long_about = LONG_ABOUT)]
#[command(disable_help_subcommand = true, allow_external_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory containing the bundled skills/ and examples/
    #[arg(
        long,
        global = true,
        env = BUNDLE_DIR_ENV,
        value_name = "PATH",
        help_heading = "Install Options"
    )]
    pub bundle_dir: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Text,
        help_heading = "Output Options"
    )]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true, help_heading = "Output Options")]
    pub json: bool,

    /// Disable colored output (also respects a non-empty NO_COLOR)
    #[arg(long, global = true, help_heading = "Output Options")]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Debug Options")]
    pub verbose: bool,
}

impl Cli {
    /// Returns the effective output format, considering --json shorthand.
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// Returns the command to run; no command means `help`.
    pub fn command_or_help(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Help(TrailingArgs::default()))
    }

    /// Command line used when argv starts with an option clap does not know.
    ///
    /// The option is reported like any other unknown command name.
    pub fn unknown_command(name: String) -> Self {
        Self {
            command: Some(Commands::External(vec![name])),
            bundle_dir: None,
            format: OutputFormat::Text,
            json: false,
            no_color: false,
            verbose: false,
        }
    }
}

/// The argument clap rejected as unexpected, if that is why parsing failed.
pub fn unknown_argument(error: &clap::Error) -> Option<String> {
    if error.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match error.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.clone()),
        _ => None,
    }
}

// Words after a fixed command. Accepted and ignored. No doc comment here:
// it would replace the about text of every command that flattens it.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailingArgs {
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true,
        value_name = "ARG"
    )]
    pub rest: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show the command overview
    Help(TrailingArgs),

    /// Show the full testing guide
    Guide(TrailingArgs),

    /// Show the quick start walkthrough
    Quickstart(TrailingArgs),

    /// List the bundled example projects
    Examples(TrailingArgs),

    /// Show the required Maven dependencies
    Deps(TrailingArgs),

    /// Print a JUnit 5 test template
    #[command(long_about = r#"Print a JUnit 5 test template.

Types: model, service, component, servlet

Without a valid type, the list of available templates is printed instead.
An optional class name replaces the template's placeholder class
(MyModel, MyService, ...). A trailing 'Test' is ignored.

EXAMPLES:
    aem-junit-skill template model
    aem-junit-skill template model HeroComponent
    aem-junit-skill template servlet SearchServletTest"#)]
    Template {
        /// Template type (model, service, component, servlet)
        #[arg(value_name = "TYPE", allow_hyphen_values = true)]
        kind: Option<String>,

        /// Class under test
        #[arg(value_name = "CLASS", allow_hyphen_values = true)]
        class_name: Option<String>,

        #[command(flatten)]
        extra: TrailingArgs,
    },

    /// Show a complete pom.xml configuration
    Config(TrailingArgs),

    /// Print a shell completion script
    #[command(long_about = r#"Print a shell completion script.

EXAMPLES:
    # Bash
    aem-junit-skill completions bash > ~/.local/share/bash-completion/completions/aem-junit-skill

    # Zsh
    aem-junit-skill completions zsh > ~/.zsh/completions/_aem-junit-skill

    # Fish
    aem-junit-skill completions fish > ~/.config/fish/completions/aem-junit-skill.fish"#)]
    Completions {
        #[arg(value_enum, value_name = "SHELL")]
        shell: Shell,
    },

    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Commands {
    pub fn name(&self) -> &str {
        match self {
            Commands::Help(_) => "help",
            Commands::Guide(_) => "guide",
            Commands::Quickstart(_) => "quickstart",
            Commands::Examples(_) => "examples",
            Commands::Deps(_) => "deps",
            Commands::Template { .. } => "template",
            Commands::Config(_) => "config",
            Commands::Completions { .. } => "completions",
            Commands::External(args) => args.first().map(String::as_str).unwrap_or(""),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn no_args() -> TrailingArgs {
        TrailingArgs::default()
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_help() {
        let cli = Cli::parse_from(["aem-junit-skill"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.command_or_help(), Commands::Help(no_args()));
    }

    #[test]
    fn test_help_is_a_command() {
        let cli = Cli::parse_from(["aem-junit-skill", "help"]);
        assert_eq!(cli.command, Some(Commands::Help(no_args())));
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "aem-junit-skill",
            "--format",
            "json",
            "--verbose",
            "--bundle-dir",
            "/opt/skill",
            "deps",
        ]);
        assert_eq!(cli.effective_format(), OutputFormat::Json);
        assert!(cli.verbose);
        assert_eq!(cli.bundle_dir, Some(PathBuf::from("/opt/skill")));
        assert_eq!(cli.command, Some(Commands::Deps(no_args())));
    }

    #[test]
    fn test_json_shorthand() {
        let cli = Cli::parse_from(["aem-junit-skill", "examples", "--json"]);
        assert_eq!(cli.effective_format(), OutputFormat::Json);
        assert_eq!(cli.command, Some(Commands::Examples(no_args())));
    }

    #[test]
    fn test_extra_words_after_fixed_command_are_kept_aside() {
        let cli = Cli::parse_from(["aem-junit-skill", "deps", "extra", "--frob", "-x"]);
        let Some(Commands::Deps(extra)) = cli.command else {
            panic!("Expected Deps command, got {:?}", cli.command);
        };
        assert_eq!(extra.rest, vec!["extra", "--frob", "-x"]);

        let cli = Cli::parse_from(["aem-junit-skill", "help", "foo"]);
        assert_eq!(cli.command.as_ref().map(Commands::name), Some("help"));
    }

    #[test]
    fn test_unknown_flag_after_fixed_command_is_ignored() {
        let cli = Cli::parse_from(["aem-junit-skill", "guide", "--frob"]);
        assert_eq!(cli.command.as_ref().map(Commands::name), Some("guide"));
    }

    #[test]
    fn test_template_without_args() {
        let cli = Cli::parse_from(["aem-junit-skill", "template"]);
        assert_eq!(
            cli.command,
            Some(Commands::Template {
                kind: None,
                class_name: None,
                extra: no_args(),
            })
        );
    }

    #[test]
    fn test_template_unknown_type_is_accepted_by_parser() {
        let cli = Cli::parse_from(["aem-junit-skill", "template", "widget", "bad-name"]);
        let Some(Commands::Template { kind, class_name, .. }) = cli.command else {
            panic!("Expected Template command, got {:?}", cli.command);
        };
        assert_eq!(kind.as_deref(), Some("widget"));
        assert_eq!(class_name.as_deref(), Some("bad-name"));
    }

    #[test]
    fn test_template_class_name_is_passed_through_raw() {
        let cli = Cli::parse_from([
            "aem-junit-skill",
            "template",
            "model",
            "HeroComponentTest",
            "ignored",
        ]);
        let Some(Commands::Template {
            class_name, extra, ..
        }) = cli.command
        else {
            panic!("Expected Template command, got {:?}", cli.command);
        };
        assert_eq!(class_name.as_deref(), Some("HeroComponentTest"));
        assert_eq!(extra.rest, vec!["ignored"]);
    }

    #[test]
    fn test_template_keeps_global_flags() {
        let cli = Cli::parse_from(["aem-junit-skill", "template", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.command.as_ref().map(Commands::name), Some("template"));
    }

    #[test]
    fn test_unknown_command_is_external() {
        let cli = Cli::parse_from(["aem-junit-skill", "frobnicate", "now"]);
        assert_eq!(
            cli.command,
            Some(Commands::External(vec![
                "frobnicate".to_string(),
                "now".to_string()
            ]))
        );
        assert_eq!(cli.command_or_help().name(), "frobnicate");
    }

    #[test]
    fn test_unknown_top_level_option_becomes_unknown_command() {
        for flag in ["--frob", "-x"] {
            let err = match Cli::try_parse_from(["aem-junit-skill", flag]) {
                Ok(_) => panic!("{flag} should not parse"),
                Err(err) => err,
            };
            assert_eq!(unknown_argument(&err).as_deref(), Some(flag));

            let cli = Cli::unknown_command(flag.to_string());
            assert_eq!(cli.command_or_help().name(), flag);
            assert_eq!(cli.effective_format(), OutputFormat::Text);
        }
    }

    #[test]
    fn test_other_parse_errors_are_not_unknown_commands() {
        let err = match Cli::try_parse_from(["aem-junit-skill", "--format", "yaml", "deps"]) {
            Ok(_) => panic!("yaml is not an output format"),
            Err(err) => err,
        };
        assert!(unknown_argument(&err).is_none());
    }

    #[test]
    fn test_completions_command() {
        let cli = Cli::parse_from(["aem-junit-skill", "completions", "bash"]);
        let Some(Commands::Completions { shell }) = cli.command else {
            panic!("Expected Completions command, got {:?}", cli.command);
        };
        assert!(matches!(shell, Shell::Bash));
    }
}
