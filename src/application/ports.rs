//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::collections::BTreeSet;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::review::{CommentTemplate, PostedComment, ReviewContext};
use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 이슈 트래커(GitHub) 코멘트/라벨 API 추상화 포트.
#[async_trait]
pub trait IssueClient: Send + Sync {
    /// 이슈(PR)에 코멘트를 만든다.
    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<PostedComment>;

    /// 이슈(PR)에 라벨을 추가한다. 기존 라벨은 유지된다.
    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &BTreeSet<String>,
    ) -> Result<()>;
}

/// 코멘트 본문 렌더링 포트.
pub trait CommentRenderer: Send + Sync {
    fn render(
        &self,
        template: CommentTemplate,
        context: &ReviewContext,
        review: &str,
        docs_url: &str,
    ) -> String;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
