//! review-poster library root.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::usecases::post_review::PostOutcome;
use domain::review::RunOptions;
use infrastructure::actions_env::process_env;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run(options: RunOptions) -> Result<PostOutcome> {
    let composition = AppComposition::new(options.config_path.clone());
    composition.post_review(options, &process_env).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
