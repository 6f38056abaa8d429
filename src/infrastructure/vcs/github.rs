//! GitHub 이슈 코멘트/라벨 API 연동 구현.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::IssueClient;
use crate::domain::review::PostedComment;

pub struct GitHubIssueClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubIssueClient {
    /// `api_base`는 `https://api.github.com` 또는 GHES의 `/api/v3` 경로.
    pub fn new(api_base: String, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn issue_endpoint(&self, owner: &str, repo: &str, issue_number: u64, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/{}",
            self.api_base, owner, repo, issue_number, tail
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        let req = self
            .client
            .request(method, url)
            .header("User-Agent", "review-poster")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        if let Some(token) = &self.token {
            req.bearer_auth(token)
        } else {
            req
        }
    }
}

#[derive(Debug, Deserialize)]
struct IssueCommentResponse {
    id: u64,
    #[serde(default)]
    html_url: Option<String>,
}

#[async_trait]
impl IssueClient for GitHubIssueClient {
    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<PostedComment> {
        let url = self.issue_endpoint(owner, repo, issue_number, "comments");
        tracing::debug!(%url, bytes = body.len(), "github: creating issue comment");

        let resp = self
            .request(Method::POST, url)
            .json(&json!({ "body": body }))
            .send()
            .await
            .context("github: failed to create comment")?;

        let status = resp.status();
        let response_body = resp
            .text()
            .await
            .context("github: failed to read create-comment body")?;

        if !status.is_success() {
            anyhow::bail!("github: failed to create comment ({status}): {response_body}");
        }

        // 2xx면 코멘트는 이미 생성됐다. 응답을 못 읽어도 실패로 돌리지 않는다.
        match serde_json::from_str::<IssueCommentResponse>(&response_body) {
            Ok(comment) => Ok(PostedComment {
                id: comment.id.to_string(),
                html_url: comment.html_url,
            }),
            Err(err) => {
                tracing::warn!(%status, %err, "github: comment created but response JSON is unreadable");
                Ok(PostedComment {
                    id: String::new(),
                    html_url: None,
                })
            }
        }
    }

    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &BTreeSet<String>,
    ) -> Result<()> {
        let url = self.issue_endpoint(owner, repo, issue_number, "labels");
        tracing::debug!(%url, ?labels, "github: adding labels");

        let resp = self
            .request(Method::POST, url)
            .json(&json!({ "labels": labels }))
            .send()
            .await
            .context("github: failed to add labels")?;

        let status = resp.status();
        if !status.is_success() {
            let response_body = resp
                .text()
                .await
                .context("github: failed to read add-labels body")?;
            anyhow::bail!("github: failed to add labels ({status}): {response_body}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn labels() -> BTreeSet<String> {
        BTreeSet::from(["ai-review".to_string()])
    }

    #[tokio::test]
    async fn create_comment_posts_body_with_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/kernel-patches/bpf/issues/314/comments"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("accept", "application/vnd.github+json"))
            .and(body_json(json!({ "body": "hello" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 99,
                "html_url": "https://github.com/kernel-patches/bpf/pull/314#issuecomment-99",
                "body": "hello"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubIssueClient::new(server.uri(), Some("test-token".to_string()));
        let comment = client
            .create_comment("kernel-patches", "bpf", 314, "hello")
            .await
            .unwrap();

        assert_eq!(comment.id, "99");
        assert_eq!(
            comment.html_url.as_deref(),
            Some("https://github.com/kernel-patches/bpf/pull/314#issuecomment-99")
        );
    }

    #[tokio::test]
    async fn created_comment_with_unreadable_response_still_counts_as_posted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/kernel-patches/bpf/issues/314/comments"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubIssueClient::new(server.uri(), None);
        let comment = client
            .create_comment("kernel-patches", "bpf", 314, "hello")
            .await
            .unwrap();

        assert_eq!(comment.id, "");
        assert_eq!(comment.html_url, None);
    }

    #[tokio::test]
    async fn create_comment_surfaces_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/kernel-patches/bpf/issues/314/comments"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string(r#"{"message":"Resource not accessible"}"#),
            )
            .mount(&server)
            .await;

        let client = GitHubIssueClient::new(server.uri(), None);
        let err = client
            .create_comment("kernel-patches", "bpf", 314, "hello")
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("Resource not accessible"));
    }

    #[tokio::test]
    async fn add_labels_sends_label_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/kernel-patches/bpf/issues/314/labels"))
            .and(body_json(json!({ "labels": ["ai-review"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "name": "ai-review" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubIssueClient::new(format!("{}/", server.uri()), None);
        client
            .add_labels("kernel-patches", "bpf", 314, &labels())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn add_labels_surfaces_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/kernel-patches/bpf/issues/314/labels"))
            .respond_with(ResponseTemplate::new(422).set_body_string("Validation Failed"))
            .mount(&server)
            .await;

        let client = GitHubIssueClient::new(server.uri(), None);
        let err = client
            .add_labels("kernel-patches", "bpf", 314, &labels())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("422"));
    }
}
