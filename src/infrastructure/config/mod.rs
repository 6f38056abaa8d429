//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod resolve;
mod types;

use std::path::Path;

use anyhow::Result;

pub use inspection::{ConfigInspection, EffectiveSettings};
pub use loader::{CONFIG_ENV, PROJECT_CONFIG_PATH, config_paths};
pub use resolve::{API_URL_ENV, TokenResolution, resolve_api_base, resolve_token};
pub use types::{Config, DEFAULT_API_BASE, DEFAULT_TOKEN_ENV};

impl Config {
    /// 병합된 최종 설정을 로딩한다.
    pub fn load(env_path: Option<&Path>, explicit: Option<&Path>) -> Result<Self> {
        Ok(loader::load_merged_config(env_path, explicit)?.config)
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect(
        env_path: Option<&Path>,
        explicit: Option<&Path>,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<ConfigInspection> {
        let loaded = loader::load_merged_config(env_path, explicit)?;
        Ok(ConfigInspection::from_loaded(loaded, lookup))
    }
}
