use std::sync::Arc;

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use screening_cli::commands::{self, Command, Effect};
use screening_cli::config::{self, ScreeningConfig};
use screening_cli::render::render;
use screening_session::client::{HttpScoringClient, ScoringClient};
use screening_session::shared::{PredictOutcome, SharedAssessment};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never interleave with the prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = config::config_path()?;
    let config: ScreeningConfig =
        config::load_or_init_config(&path)?.with_overrides(|key| std::env::var(key).ok())?;
    tracing::info!(scoring_url = %config.scoring_url, "configuration loaded");

    let client: Arc<dyn ScoringClient> =
        Arc::new(HttpScoringClient::new(config.scoring_url.clone(), config.timeout())?);
    let session = SharedAssessment::default();

    println!("Alzheimer's Screening");
    println!("Complete all four screening tests to receive a comprehensive assessment.");
    println!("Type 'help' for commands.\n");
    print!("{}", render(&*session.lock().await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let effect = {
            let mut assessment = session.lock().await;
            commands::apply(&mut assessment, command)
        };

        match effect {
            Ok(Effect::Render) => print!("{}", render(&*session.lock().await)),
            Ok(Effect::Notice(message)) => println!("{message}"),
            Ok(Effect::Help) => println!("{}", commands::HELP),
            Ok(Effect::Quit) => break,
            Ok(Effect::Predict) => {
                println!("Processing...");
                let session = session.clone();
                let client = client.clone();
                tokio::spawn(async move {
                    match session.predict(client.as_ref()).await {
                        PredictOutcome::Ready(_) => print!("\n{}", render(&*session.lock().await)),
                        PredictOutcome::Failed(_) => {
                            println!("\nThe assessment could not be generated. Type 'predict' to try again.")
                        }
                        PredictOutcome::Skipped => {}
                    }
                });
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
