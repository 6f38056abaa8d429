//! 리뷰 게시 도메인 엔티티/값 객체.

use std::path::PathBuf;

/// 게시 후 이슈에 붙이는 기본 라벨.
pub const AI_REVIEW_LABEL: &str = "ai-review";

/// 패치 제목을 알 수 없을 때 `In-Reply-To-Subject:` 줄에 들어가는 문구.
pub const MISSING_SUBJECT_PLACEHOLDER: &str = "Could not determine patch subject";

/// 패치 리뷰 footer가 가리키는 안내 문서 기본 URL.
pub const DEFAULT_DOCS_URL: &str =
    "https://github.com/kernel-patches/vmtest/blob/master/ci/claude/README.md";

/// CLI에서 넘어온 실행 옵션.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub template: CommentTemplate,
    pub issue_number: Option<u64>,
    pub dry_run: bool,
    pub config_path: Option<PathBuf>,
}

/// 한 번의 실행 동안만 쓰이는 게시 대상/CI 실행 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewContext {
    pub server_url: String,
    pub repository_slug: String,
    pub run_id: String,
    pub review_file_path: PathBuf,
    pub issue_number: u64,
    pub owner_login: String,
    pub repo_name: String,
    pub optional_subject: Option<String>,
}

impl ReviewContext {
    /// 리뷰를 만든 CI 실행 페이지 URL.
    pub fn job_summary_url(&self) -> String {
        format!(
            "{}/{}/actions/runs/{}",
            self.server_url, self.repository_slug, self.run_id
        )
    }

    /// 로그 출력용 `owner/repo#number` 표기.
    pub fn issue_ref(&self) -> String {
        format!("{}/{}#{}", self.owner_login, self.repo_name, self.issue_number)
    }
}

/// 코멘트 본문 템플릿.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentTemplate {
    /// PR 코멘트용: 실행 요약 URL + inline review 블록
    #[default]
    ReviewSummary,
    /// 패치 시리즈용: review 블록 + 회신 안내 footer
    PatchReview,
}

impl CommentTemplate {
    pub fn code(self) -> &'static str {
        match self {
            Self::ReviewSummary => "review-summary",
            Self::PatchReview => "patch-review",
        }
    }
}

/// 게시 동작을 조정하는 값 묶음.
#[derive(Debug, Clone)]
pub struct PostOptions {
    pub template: CommentTemplate,
    pub label: String,
    pub docs_url: String,
    pub dry_run: bool,
}

impl Default for PostOptions {
    fn default() -> Self {
        Self {
            template: CommentTemplate::default(),
            label: AI_REVIEW_LABEL.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            dry_run: false,
        }
    }
}

/// 원격 서비스가 돌려준 코멘트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    /// 생성 응답을 읽지 못했으면 빈 문자열
    pub id: String,
    pub html_url: Option<String>,
}

/// 게시 흐름의 진행 단계. 실패 시 마지막으로 도달한 단계에서 멈춘다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStage {
    Idle,
    FileRead,
    CommentPosted,
    LabelApplied,
    Done,
}

impl PostStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FileRead => "file-read",
            Self::CommentPosted => "comment-posted",
            Self::LabelApplied => "label-applied",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for PostStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
