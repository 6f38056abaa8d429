//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigRepository;
use crate::infrastructure::actions_env::process_env;
use crate::infrastructure::config::{self, CONFIG_ENV};

/// JSON 기반 설정 저장소 어댑터.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigRepository {
    /// `--config`로 넘어온 경로
    pub explicit_path: Option<PathBuf>,
}

impl JsonConfigRepository {
    fn env_path(&self) -> Option<PathBuf> {
        process_env(CONFIG_ENV).map(PathBuf::from)
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<config::Config> {
        config::Config::load(self.env_path().as_deref(), self.explicit_path.as_deref())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        let inspection = config::Config::inspect(
            self.env_path().as_deref(),
            self.explicit_path.as_deref(),
            &process_env,
        )?;
        Ok(serde_json::to_string_pretty(&inspection)?)
    }
}
