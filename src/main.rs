//! `review-poster` 바이너리 진입점.

use review_poster::infrastructure::actions_env::process_env;
use review_poster::interface::cli::{AppComposition, Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse_action() {
        CliAction::InspectConfig { config_path } => {
            let composition = AppComposition::new(config_path);
            match composition.inspect_config_usecase().execute() {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        CliAction::Post(options) => {
            let composition = AppComposition::new(options.config_path.clone());
            if let Err(err) = composition.post_review(options, &process_env).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
