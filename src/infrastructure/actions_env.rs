//! GitHub Actions 실행 환경에서 게시 컨텍스트를 구성하는 모듈.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::domain::review::ReviewContext;

pub const SERVER_URL_ENV: &str = "GITHUB_SERVER_URL";
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const RUN_ID_ENV: &str = "GITHUB_RUN_ID";
pub const REVIEW_FILE_ENV: &str = "REVIEW_FILE";
pub const PATCH_SUBJECT_ENV: &str = "PATCH_SUBJECT";
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// 프로세스 환경변수를 조회한다. 빈 값은 없는 것으로 본다.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// 환경변수와 이벤트 payload로 `ReviewContext`를 만든다.
/// `issue_override`가 있으면 payload는 읽지 않는다.
pub fn load_review_context(
    lookup: &dyn Fn(&str) -> Option<String>,
    issue_override: Option<u64>,
) -> Result<ReviewContext> {
    let server_url = required(lookup, SERVER_URL_ENV)?;
    let repository_slug = required(lookup, REPOSITORY_ENV)?;
    let run_id = required(lookup, RUN_ID_ENV)?;
    let review_file_path = PathBuf::from(required(lookup, REVIEW_FILE_ENV)?);
    let (owner_login, repo_name) = split_repository(&repository_slug)?;

    let issue_number = match issue_override {
        Some(number) => number,
        None => {
            let event_path = lookup(EVENT_PATH_ENV).with_context(|| {
                format!("missing issue number: pass --issue or set {EVENT_PATH_ENV}")
            })?;
            issue_number_from_event_file(Path::new(&event_path))?
        }
    };

    // 공백뿐인 제목은 없는 것으로 보고 placeholder를 쓰게 한다. 그 외에는 그대로 인용한다.
    let optional_subject = lookup(PATCH_SUBJECT_ENV).filter(|v| !v.trim().is_empty());

    Ok(ReviewContext {
        server_url: server_url.trim_end_matches('/').to_string(),
        repository_slug,
        run_id,
        review_file_path,
        issue_number,
        owner_login,
        repo_name,
        optional_subject,
    })
}

/// `owner/repo` 형식을 분리한다.
pub fn split_repository(slug: &str) -> Result<(String, String)> {
    match slug.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => bail!("{REPOSITORY_ENV} must look like owner/repo, got '{slug}'"),
    }
}

fn issue_number_from_event_file(path: &Path) -> Result<u64> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read event payload at {}", path.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("invalid event payload JSON in {}", path.display()))?;
    issue_number_from_event(&payload)
        .with_context(|| format!("event payload at {} has no issue number", path.display()))
}

/// Actions의 `context.issue.number`와 같은 순서로 찾는다:
/// `issue.number` -> `pull_request.number` -> 최상위 `number`.
pub fn issue_number_from_event(payload: &Value) -> Option<u64> {
    ["issue", "pull_request"]
        .iter()
        .find_map(|key| payload.get(key).and_then(|v| v.get("number")))
        .or_else(|| payload.get("number"))
        .and_then(Value::as_u64)
}

fn required(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name).with_context(|| format!("missing required environment variable {name}"))
}
