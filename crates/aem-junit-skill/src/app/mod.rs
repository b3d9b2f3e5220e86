//! CLI application layer and composition root wiring.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use tracing::debug;

pub mod commands;
pub mod handlers;

use crate::adapters::presenter::Presenter;
use crate::adapters::presenter::create_presenter;
use crate::app::commands::Cli;
use crate::app::commands::Commands;
use crate::app::commands::Shell;
use crate::app::commands::unknown_argument;
use crate::app::handlers::HandlerContext;
use crate::bundle::BundleLayout;
use crate::common::color_init;
use crate::common::telemetry;
use crate::content::PROGRAM_NAME;
use crate::error::SkillError;

mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
}

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Parses argv, runs one command and returns the process exit code.
    ///
    /// An option clap does not recognize is reported as an unknown command.
    /// Other clap errors (and `--help`/`--version`) exit through clap.
    pub fn run(&self) -> Result<i32> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => match unknown_argument(&err) {
                Some(arg) => Cli::unknown_command(arg),
                None => err.exit(),
            },
        };
        let _telemetry = telemetry::init_tracing(if cli.verbose { "debug" } else { "warn" });
        color_init(cli.no_color);
        Ok(self.run_cli(&cli))
    }

    /// Runs an already-parsed command line.
    pub fn run_cli(&self, cli: &Cli) -> i32 {
        let format = cli.effective_format();
        let command = cli.command_or_help();
        debug!(
            command = command.name(),
            format = ?format,
            bundle_dir = ?cli.bundle_dir,
            "CLI command parsed"
        );

        let presenter = create_presenter(format);
        let (bundle, source) = BundleLayout::resolve(cli.bundle_dir.as_deref());
        debug!(root = %bundle.root().display(), source = ?source, "Bundle root resolved");

        let ctx = HandlerContext::new(presenter, bundle);
        match self.dispatch_command(&ctx, &command) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => self.handle_error(ctx.presenter.as_ref(), e),
        }
    }

    fn dispatch_command(
        &self,
        ctx: &HandlerContext,
        command: &Commands,
    ) -> handlers::HandlerResult {
        match command {
            Commands::Help(_) => handlers::handle_help(ctx),
            Commands::Guide(_) => handlers::handle_guide(ctx),
            Commands::Quickstart(_) => handlers::handle_quickstart(ctx),
            Commands::Examples(_) => handlers::handle_examples(ctx),
            Commands::Deps(_) => handlers::handle_deps(ctx),
            Commands::Template {
                kind, class_name, ..
            } => handlers::handle_template(ctx, kind.as_deref(), class_name.as_deref()),
            Commands::Config(_) => handlers::handle_config(ctx),
            Commands::External(args) => handlers::handle_unknown(args),
            Commands::Completions { shell } => {
                print_completions(*shell);
                Ok(())
            }
        }
    }

    fn handle_error(&self, presenter: &dyn Presenter, error: anyhow::Error) -> i32 {
        debug!(error = ?error, "Command failed");
        if let Some(skill_error) = find_error::<SkillError>(&error) {
            presenter.present_skill_error(skill_error);
            return skill_error.exit_code();
        }
        presenter.present_error(&format!("{:#}", error));
        exit_codes::GENERAL_ERROR
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, PROGRAM_NAME, &mut io::stdout());
}

fn find_error<T: std::error::Error + 'static>(error: &anyhow::Error) -> Option<&T> {
    error.chain().find_map(|source| source.downcast_ref::<T>())
}
