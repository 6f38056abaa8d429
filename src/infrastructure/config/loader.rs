//! 설정 파일 탐색/병합 로더.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::Config;

/// 저장소 안에 두는 기본 설정 경로.
pub const PROJECT_CONFIG_PATH: &str = ".github/review-poster.json";
/// 설정 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "REVIEW_POSTER_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 명시 경로(환경변수/CLI)는 반드시 존재해야 한다.
pub(crate) fn load_merged_config(
    env_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();
    let paths = config_paths(env_path, explicit);

    for path in &paths {
        let required = Some(path.as_path()) == env_path || Some(path.as_path()) == explicit;
        if !path.exists() {
            if required {
                bail!("config file not found: {}", path.display());
            }
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 프로젝트 -> 환경변수 -> CLI 순으로 병합 경로를 구성한다.
pub fn config_paths(env_path: Option<&Path>, explicit: Option<&Path>) -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from(PROJECT_CONFIG_PATH)];
    paths.extend(env_path.map(Path::to_path_buf));
    paths.extend(explicit.map(Path::to_path_buf));
    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn explicit_path_overrides_env_path() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = write(
            dir.path(),
            "env.json",
            r#"{"label": "from-env", "docs_url": "https://docs.example"}"#,
        );
        let cli_file = write(dir.path(), "cli.json", r#"{"label": "from-cli"}"#);

        let loaded = load_merged_config(Some(&env_file), Some(&cli_file)).unwrap();

        assert_eq!(loaded.config.label(), "from-cli");
        assert_eq!(loaded.config.docs_url(), "https://docs.example");
        assert_eq!(loaded.loaded_paths, vec![env_file, cli_file]);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = load_merged_config(None, Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write(dir.path(), "broken.json", "{ label: ");

        let err = load_merged_config(Some(&broken), None).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn paths_are_deduplicated_in_priority_order() {
        let same = Path::new("/tmp/review-poster.json");
        let paths = config_paths(Some(same), Some(same));
        assert_eq!(
            paths,
            vec![PathBuf::from(PROJECT_CONFIG_PATH), same.to_path_buf()]
        );
    }
}
