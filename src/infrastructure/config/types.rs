//! 설정 스키마와 병합 규칙.

use serde::{Deserialize, Serialize};

use crate::domain::review::{AI_REVIEW_LABEL, DEFAULT_DOCS_URL};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// 게시 후 붙일 라벨
    pub label: Option<String>,
    /// 패치 리뷰 footer의 안내 문서 URL
    pub docs_url: Option<String>,
    /// REST API 베이스 URL (GHES 등)
    pub api_base: Option<String>,
    /// 인증 토큰(직접값)
    pub token: Option<String>,
    /// 인증 토큰을 읽을 환경변수 이름
    pub token_env: Option<String>,
}

impl Config {
    pub fn label(&self) -> String {
        non_empty(self.label.as_deref())
            .unwrap_or(AI_REVIEW_LABEL)
            .to_string()
    }

    pub fn docs_url(&self) -> String {
        non_empty(self.docs_url.as_deref())
            .unwrap_or(DEFAULT_DOCS_URL)
            .to_string()
    }

    pub fn token_env(&self) -> &str {
        non_empty(self.token_env.as_deref()).unwrap_or(DEFAULT_TOKEN_ENV)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        if other.label.is_some() {
            self.label = other.label;
        }
        if other.docs_url.is_some() {
            self.docs_url = other.docs_url;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.token_env.is_some() {
            self.token_env = other.token_env;
        }
    }

    /// 진단 출력용 사본. 토큰 직접값은 가린다.
    pub(crate) fn redacted(&self) -> Config {
        Config {
            token: self.token.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
