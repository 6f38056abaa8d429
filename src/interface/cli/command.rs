//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::review::{CommentTemplate, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "review-poster")]
#[command(about = "Post an AI review as a GitHub issue/PR comment and label it")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Comment body template
    #[arg(long, value_enum, default_value_t = TemplateArg::ReviewSummary)]
    template: TemplateArg,

    /// Issue/PR number (default: read from $GITHUB_EVENT_PATH)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    issue: Option<u64>,

    /// Print the comment to stdout, do not post
    #[arg(long)]
    dry_run: bool,

    /// Extra JSON config file (highest priority)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and token source
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TemplateArg {
    /// Job summary link followed by the inline review
    ReviewSummary,
    /// Review followed by the patch reply footer
    PatchReview,
}

impl From<TemplateArg> for CommentTemplate {
    fn from(value: TemplateArg) -> Self {
        match value {
            TemplateArg::ReviewSummary => CommentTemplate::ReviewSummary,
            TemplateArg::PatchReview => CommentTemplate::PatchReview,
        }
    }
}

pub enum CliAction {
    InspectConfig { config_path: Option<PathBuf> },
    Post(RunOptions),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig {
                config_path: self.config,
            },
            None => CliAction::Post(RunOptions {
                template: self.template.into(),
                issue_number: self.issue,
                dry_run: self.dry_run,
                config_path: self.config,
            }),
        }
    }
}
