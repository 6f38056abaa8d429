//! 병합된 설정과 토큰 해석 결과를 확인하는 유스케이스.
//! CI에서 `review-poster config`로 게시 전에 설정을 점검할 때 쓴다.

use anyhow::{Context, Result};

use crate::application::ports::ConfigRepository;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl InspectConfigUseCase<'_> {
    /// 토큰 값은 가린 진단 JSON을 반환한다.
    pub fn execute(&self) -> Result<String> {
        self.config_repo
            .inspect_pretty_json()
            .context("failed to inspect review-poster config")
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::infrastructure::config::Config;

    struct StaticRepo {
        broken: bool,
    }

    impl ConfigRepository for StaticRepo {
        fn load(&self) -> Result<Config> {
            Ok(Config::default())
        }

        fn inspect_pretty_json(&self) -> Result<String> {
            if self.broken {
                bail!("failed to parse JSON in .github/review-poster.json");
            }
            Ok("{\n  \"label\": \"ai-review\"\n}".to_string())
        }
    }

    #[test]
    fn returns_repository_json() {
        let repo = StaticRepo { broken: false };
        let json = InspectConfigUseCase { config_repo: &repo }.execute().unwrap();
        assert!(json.contains("ai-review"));
    }

    #[test]
    fn wraps_repository_error() {
        let repo = StaticRepo { broken: true };
        let err = InspectConfigUseCase { config_repo: &repo }
            .execute()
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to inspect review-poster config");
        assert!(format!("{err:#}").contains("review-poster.json"));
    }
}
