//! Shared application state, constructed once and handed to every handler.
//!
//! The former-global dictionaries of the conversation flows live here as
//! owned stores. Handlers lock a store, mutate, compute the resulting action
//! as a value, release the lock, and only then talk to Telegram or the
//! spreadsheet; no lock is ever held across a collaborator call, so every
//! state transition is atomic relative to other incoming events.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::polls::PollRegistry;
use crate::questionnaire::engine::QuestionnaireEngine;
use crate::questionnaire::QuestionnaireDefinition;
use crate::sheets::AnswerSink;

/// Everything the update handlers share.
pub struct AppState {
    /// Questionnaire session state machine.
    pub engine: Mutex<QuestionnaireEngine>,
    /// Live demo poll tickets.
    pub polls: Mutex<PollRegistry>,
    /// The fixed questionnaire, also needed by the export path.
    pub definition: Arc<QuestionnaireDefinition>,
    /// Where completed questionnaires are flushed to.
    pub sheets: Arc<dyn AnswerSink>,
}

impl AppState {
    /// Wire up fresh state over a questionnaire definition and answer sink.
    pub fn new(definition: QuestionnaireDefinition, sheets: Arc<dyn AnswerSink>) -> Self {
        let definition = Arc::new(definition);
        Self {
            engine: Mutex::new(QuestionnaireEngine::new(Arc::clone(&definition))),
            polls: Mutex::new(PollRegistry::new()),
            definition,
            sheets,
        }
    }
}
