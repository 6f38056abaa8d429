//! 설정 값(token/api_base)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 조회는 `lookup` 클로저로 주입받아 테스트에서 바꿔 끼울 수 있다.

use anyhow::{Context, Result, bail};
use url::Url;

use super::types::{Config, DEFAULT_API_BASE};

/// API 베이스를 덮어쓰는 Actions 환경변수.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// 토큰 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResolution {
    pub token: Option<String>,
    pub source: Option<String>,
}

/// 토큰은 `token` 직접값 우선, 없으면 `token_env`(기본 `GITHUB_TOKEN`)를 조회한다.
pub fn resolve_token(cfg: &Config, lookup: &dyn Fn(&str) -> Option<String>) -> TokenResolution {
    if let Some(token) = cfg.token.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return TokenResolution {
            token: Some(token.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let env_name = cfg.token_env();
    match lookup(env_name).map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => TokenResolution {
            token: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => TokenResolution {
            token: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}

/// API 베이스 URL을 정한다: 설정값 -> `GITHUB_API_URL` -> 공개 API.
pub fn resolve_api_base(cfg: &Config, lookup: &dyn Fn(&str) -> Option<String>) -> Result<String> {
    let raw = cfg
        .api_base
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .or_else(|| lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    let url = Url::parse(raw.trim()).with_context(|| format!("invalid API base URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported API base scheme: {raw}");
    }

    Ok(raw.trim().trim_end_matches('/').to_string())
}
