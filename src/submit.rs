use std::future::Future;

use thiserror::Error;

use crate::form::Outcome;
use crate::model::SignUpFormData;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode sign-up data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
}

/// Default submission: no backend yet, so the captured data is logged with
/// the password masked.
pub async fn log_sign_up(data: SignUpFormData) -> Result<(), SubmitError> {
    let json = serde_json::to_string(&data.redacted())?;
    log::info!("sign-up submitted: {json}");
    Ok(())
}

/// Runs `handler` once and folds its result into the form outcome. Errors
/// are logged here and reported back as `Outcome::Failed`.
pub async fn run_submission<H, Fut>(data: SignUpFormData, handler: H) -> Outcome
where
    H: FnOnce(SignUpFormData) -> Fut,
    Fut: Future<Output = Result<(), SubmitError>>,
{
    match handler(data).await {
        Ok(()) => Outcome::Succeeded,
        Err(e) => {
            log::error!("sign-up failed: {e}");
            Outcome::Failed(e.to_string())
        }
    }
}
