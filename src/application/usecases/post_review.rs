//! 리뷰 파일을 읽어 코멘트로 게시하고 라벨을 붙이는 유스케이스.

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::application::ports::{CommentRenderer, IssueClient, Reporter};
use crate::domain::review::{PostOptions, PostStage, PostedComment, ReviewContext};

/// 게시 실패 원인.
/// 원격 호출 실패는 단계별로 나눠서, `AddLabels`면 코멘트는 이미 게시된 상태다.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("failed to read review file {}", .path.display())]
    ReviewFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid issue number: {0}")]
    InvalidIssueNumber(u64),

    #[error("failed to create comment on {issue}")]
    CreateComment {
        issue: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("comment posted but failed to add labels on {issue}")]
    AddLabels {
        issue: String,
        #[source]
        source: anyhow::Error,
    },
}

impl PostError {
    /// 실패 직전까지 도달한 단계.
    pub fn stage(&self) -> PostStage {
        match self {
            Self::ReviewFile { .. } | Self::InvalidIssueNumber(_) => PostStage::Idle,
            Self::CreateComment { .. } => PostStage::FileRead,
            Self::AddLabels { .. } => PostStage::CommentPosted,
        }
    }
}

/// 게시 결과.
#[derive(Debug, Clone)]
pub struct PostOutcome {
    pub stage: PostStage,
    pub body: String,
    /// dry-run이면 `None`
    pub comment: Option<PostedComment>,
    pub labels: BTreeSet<String>,
}

/// 파일 읽기 -> 코멘트 생성 -> 라벨 추가를 순서대로 수행한다.
pub struct PostReviewUseCase<'a> {
    pub issue_client: &'a dyn IssueClient,
    pub renderer: &'a dyn CommentRenderer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> PostReviewUseCase<'a> {
    /// 게시 본 실행 진입점.
    /// 앞 단계가 실패하면 뒤 단계 원격 호출은 하지 않는다. 재시도도 없다.
    pub async fn execute(
        &self,
        context: &ReviewContext,
        options: &PostOptions,
    ) -> Result<PostOutcome, PostError> {
        self.reporter.section("Session");
        self.reporter.kv("Issue", &context.issue_ref());
        self.reporter.kv("Template", options.template.code());
        self.reporter.kv(
            "Mode",
            if options.dry_run {
                "dry-run"
            } else {
                "post-comment"
            },
        );

        if context.issue_number == 0 {
            return Err(PostError::InvalidIssueNumber(context.issue_number));
        }

        let mut stage = PostStage::Idle;

        let review = tokio::fs::read_to_string(&context.review_file_path)
            .await
            .map_err(|source| PostError::ReviewFile {
                path: context.review_file_path.clone(),
                source,
            })?;
        stage = advance(stage, PostStage::FileRead);

        let body = self
            .renderer
            .render(options.template, context, &review, &options.docs_url);
        let labels = BTreeSet::from([options.label.clone()]);

        if options.dry_run {
            self.reporter.section("Dry Run: Comment");
            self.reporter.raw(&body);
            self.reporter.section("Dry Run: Labels");
            self.reporter.raw(&join_labels(&labels));
            return Ok(PostOutcome {
                stage,
                body,
                comment: None,
                labels,
            });
        }

        self.reporter.section("Post Comment");
        self.reporter.status("VCS", "creating comment");
        let comment = self
            .issue_client
            .create_comment(
                &context.owner_login,
                &context.repo_name,
                context.issue_number,
                &body,
            )
            .await
            .map_err(|source| PostError::CreateComment {
                issue: context.issue_ref(),
                source,
            })?;
        stage = advance(stage, PostStage::CommentPosted);
        if let Some(url) = &comment.html_url {
            self.reporter.kv("Comment", url);
        }

        self.reporter
            .status("VCS", &format!("adding labels: {}", join_labels(&labels)));
        self.issue_client
            .add_labels(
                &context.owner_login,
                &context.repo_name,
                context.issue_number,
                &labels,
            )
            .await
            .map_err(|source| PostError::AddLabels {
                issue: context.issue_ref(),
                source,
            })?;
        stage = advance(stage, PostStage::LabelApplied);

        stage = advance(stage, PostStage::Done);
        self.reporter.section("Done");
        self.reporter.status("VCS", "review comment posted");

        Ok(PostOutcome {
            stage,
            body,
            comment: Some(comment),
            labels,
        })
    }
}

fn advance(from: PostStage, to: PostStage) -> PostStage {
    tracing::debug!(from = %from, to = %to, "post stage");
    to
}

fn join_labels(labels: &BTreeSet<String>) -> String {
    labels.iter().cloned().collect::<Vec<_>>().join(", ")
}
