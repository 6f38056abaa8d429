//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::{resolve_api_base, resolve_token};
use super::types::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: Config,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub label: String,
    pub docs_url: String,
    /// 해석 실패 시 오류 메시지를 담는다.
    pub api_base: String,
    pub token_source: Option<String>,
    pub token_resolved: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(
        loaded: LoadedConfig,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Self {
        let token = resolve_token(&loaded.config, lookup);
        let api_base = resolve_api_base(&loaded.config, lookup)
            .unwrap_or_else(|err| format!("error: {err:#}"));

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            config: loaded.config.redacted(),
            effective: EffectiveSettings {
                label: loaded.config.label(),
                docs_url: loaded.config.docs_url(),
                api_base,
                token_resolved: token.token.is_some(),
                token_source: token.source,
            },
        }
    }
}
