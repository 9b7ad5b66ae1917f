//! The questionnaire session state machine.
//!
//! The engine owns all per-user conversation state (session cursors and
//! collected answers) and decides what happens next, but performs no I/O:
//! every operation returns a [`Step`] describing what the caller should emit.
//! The bot handlers translate steps into Telegram sends and the completion
//! flush, which keeps the state machine testable without a network.

use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::{ChatId, UserId};

use super::{Question, QuestionnaireDefinition};

/// Per-user position in the questionnaire.
///
/// `current_index` starts at 0 and only ever increases; the cursor is dropped
/// when the run completes. `last_asked` records the id of the question most
/// recently emitted, so answer handlers never have to reconstruct it from the
/// index.
#[derive(Debug, Clone)]
pub struct SessionCursor {
    /// Destination chat for every message in this run.
    pub chat_id: ChatId,
    /// Index of the next question to ask; terminal at definition length.
    pub current_index: usize,
    /// Id of the question just asked, if any question has been asked yet.
    pub last_asked: Option<String>,
}

impl SessionCursor {
    fn new(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            current_index: 0,
            last_asked: None,
        }
    }
}

/// A finished questionnaire run, detached from the engine's stores.
///
/// Holds everything the flush path needs; by the time a caller sees this
/// value the user's cursor and in-memory answers are already gone.
#[derive(Debug, Clone)]
pub struct CompletedRun {
    /// The user who completed the run.
    pub user_id: UserId,
    /// Chat the completion message belongs in.
    pub chat_id: ChatId,
    /// Raw answers keyed by question id (choice answers are stored as
    /// stringified option indices).
    pub answers: HashMap<String, String>,
}

/// What the caller should do after an engine operation.
#[derive(Debug, Clone)]
pub enum Step {
    /// Emit the question: a poll for multiple choice, a message otherwise.
    Ask {
        /// Destination chat.
        chat_id: ChatId,
        /// The question to emit.
        question: Question,
    },
    /// Emit the completion message and flush the run to storage.
    Complete(CompletedRun),
}

/// State machine over per-user session cursors and answer records.
///
/// All state is strictly keyed by user id, so concurrent runs for different
/// users never interfere. Abandoned runs are kept until process exit; there
/// is no expiry.
pub struct QuestionnaireEngine {
    definition: Arc<QuestionnaireDefinition>,
    sessions: HashMap<UserId, SessionCursor>,
    answers: HashMap<UserId, HashMap<String, String>>,
}

impl QuestionnaireEngine {
    /// Create an engine over the given definition.
    pub fn new(definition: Arc<QuestionnaireDefinition>) -> Self {
        Self {
            definition,
            sessions: HashMap::new(),
            answers: HashMap::new(),
        }
    }

    /// Begin (or restart) a run for `user_id`, clearing any previous answers.
    ///
    /// Returns the step for the first question, or the completion step
    /// directly when the definition is empty.
    pub fn start(&mut self, user_id: UserId, chat_id: ChatId) -> Step {
        self.answers.insert(user_id, HashMap::new());
        self.advance(user_id, SessionCursor::new(chat_id))
    }

    /// Record a free-text reply as the answer to the question just asked.
    ///
    /// Returns `None` when the user has no active session or no question has
    /// been asked yet (a user can message the bot before `/start`); such
    /// events are ignored without touching any state.
    pub fn record_text_answer(&mut self, user_id: UserId, text: &str) -> Option<Step> {
        self.record_answer(user_id, text.to_owned())
    }

    /// Record a poll vote as the answer to the question just asked.
    ///
    /// Stores the first selected option index, stringified. Returns `None`
    /// for sessions that do not exist, for runs where nothing has been asked,
    /// and for votes with no selected option (a retraction).
    pub fn record_choice_answer(&mut self, user_id: UserId, option_ids: &[i32]) -> Option<Step> {
        let selected = *option_ids.first()?;
        self.record_answer(user_id, selected.to_string())
    }

    /// Whether `user_id` currently has an active run.
    pub fn has_session(&self, user_id: UserId) -> bool {
        self.sessions.contains_key(&user_id)
    }

    /// The cursor for `user_id`, if a run is active.
    pub fn cursor(&self, user_id: UserId) -> Option<&SessionCursor> {
        self.sessions.get(&user_id)
    }

    /// Whether any answers are still held in memory for `user_id`.
    pub fn has_answers(&self, user_id: UserId) -> bool {
        self.answers.contains_key(&user_id)
    }

    fn record_answer(&mut self, user_id: UserId, raw: String) -> Option<Step> {
        let cursor = self.sessions.remove(&user_id)?;
        let question_id = match cursor.last_asked.clone() {
            Some(id) => id,
            None => {
                // An answer arrived before any question was asked; ignore it
                // and leave the session where it was.
                self.sessions.insert(user_id, cursor);
                return None;
            }
        };
        self.answers.entry(user_id).or_default().insert(question_id, raw);
        Some(self.advance(user_id, cursor))
    }

    // Takes the cursor by value: on Ask it goes back into the map updated,
    // on Complete it is dropped along with the user's answer record.
    fn advance(&mut self, user_id: UserId, mut cursor: SessionCursor) -> Step {
        match self.definition.question(cursor.current_index) {
            Some(question) => {
                let question = question.clone();
                cursor.last_asked = Some(question.id.clone());
                cursor.current_index += 1;
                let chat_id = cursor.chat_id;
                self.sessions.insert(user_id, cursor);
                Step::Ask { chat_id, question }
            }
            None => Step::Complete(CompletedRun {
                user_id,
                chat_id: cursor.chat_id,
                answers: self.answers.remove(&user_id).unwrap_or_default(),
            }),
        }
    }
}
