//! 애플리케이션 조립(composition root) 모듈.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::application::ports::ConfigRepository;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::post_review::{PostOutcome, PostReviewUseCase};
use crate::domain::review::{PostOptions, RunOptions};
use crate::infrastructure::actions_env::load_review_context;
use crate::infrastructure::adapters::{
    ConsoleReporter, JsonConfigRepository, MarkdownRendererAdapter,
};
use crate::infrastructure::config::{resolve_api_base, resolve_token};
use crate::infrastructure::vcs::GitHubIssueClient;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    renderer: MarkdownRendererAdapter,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppComposition {
    /// `--config` 경로를 받아 실행 조합을 생성한다.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_repo: JsonConfigRepository {
                explicit_path: config_path,
            },
            renderer: MarkdownRendererAdapter,
            reporter: ConsoleReporter,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 설정/환경변수를 해석해 GitHub 클라이언트를 만들고 게시 유스케이스를 실행한다.
    /// 환경변수는 `lookup`으로 읽는다. 바이너리에서는 `process_env`를 넘긴다.
    pub async fn post_review(
        &self,
        options: RunOptions,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<PostOutcome> {
        let config = self
            .config_repo
            .load()
            .context("failed to load review-poster config")?;

        let context = load_review_context(lookup, options.issue_number)
            .context("failed to read GitHub Actions environment")?;

        let token = resolve_token(&config, lookup);
        if !options.dry_run && token.token.is_none() {
            bail!(
                "missing GitHub token ({}). Set {} or configure token/token_env, or use --dry-run",
                token.source.as_deref().unwrap_or("unresolved"),
                config.token_env(),
            );
        }
        let api_base = resolve_api_base(&config, lookup)?;
        tracing::debug!(
            %api_base,
            token_source = token.source.as_deref().unwrap_or("-"),
            "github client configured"
        );

        let issue_client = GitHubIssueClient::new(api_base, token.token);
        let use_case = PostReviewUseCase {
            issue_client: &issue_client,
            renderer: &self.renderer,
            reporter: &self.reporter,
        };

        let post_options = PostOptions {
            template: options.template,
            label: config.label(),
            docs_url: config.docs_url(),
            dry_run: options.dry_run,
        };

        Ok(use_case.execute(&context, &post_options).await?)
    }
}
