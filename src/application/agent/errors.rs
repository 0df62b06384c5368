use super::models::APOLOGY_REPLY;
use crate::model::ModelError;
use thiserror::Error;

/// Turn-level failures. Tool failures never surface here; they are absorbed
/// into the conversation as error payloads for the model.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl AgentError {
    /// The single user-facing shape for any turn failure.
    pub fn user_message(&self) -> String {
        APOLOGY_REPLY.to_string()
    }
}
