//! The `fizzbot play` command.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::Result;

use fizzbot_client::config::{create_api, load_config_from};
use fizzbot_core::answer::AnswerMode;
use fizzbot_core::session::play;

pub async fn execute(
    interactive: bool,
    domain: Option<String>,
    max_attempts: Option<NonZeroU32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;

    if interactive {
        config.mode = AnswerMode::Interactive;
    }
    if let Some(domain) = domain {
        config.domain = domain;
    }
    if max_attempts.is_some() {
        config.max_attempts = max_attempts;
    }

    tracing::debug!(?config, "resolved configuration");

    let api = create_api(&config)?;
    let summary = play(
        api,
        config.mode.source(),
        std::io::stdout(),
        &config.session_config(),
    )
    .await?;

    tracing::info!(
        questions = summary.questions_answered,
        submissions = summary.submissions,
        "session finished"
    );
    Ok(())
}
