//! Registry of live demo polls, keyed by the platform-assigned poll id.
//!
//! Tickets are created the moment a poll is sent and consulted on every
//! matching incoming update. A lookup miss is not an error: it means the
//! event references a poll from a previous process lifetime (or one the bot
//! never sent) and is ignored by design.

use std::collections::HashMap;

use teloxide::types::{ChatId, MessageId};

use crate::utils::text::join_with_and;

/// How many participants a demo poll waits for before closing itself.
///
/// The survey counts its own answer events; the quiz compares against the
/// platform-reported total voter count. Two different signals, one shared
/// target.
pub const TARGET_VOTER_COUNT: i32 = 1000;

/// Bookkeeping for a live survey poll (`/poll`).
#[derive(Debug, Clone)]
pub struct SurveyTicket {
    /// Chat the poll was sent to; announcements go here too.
    pub chat_id: ChatId,
    /// Message carrying the poll, needed to stop it.
    pub message_id: MessageId,
    /// Option labels, for rendering a voter's selection.
    pub options: Vec<String>,
    /// Number of answer events received so far.
    pub answers: i32,
}

/// Bookkeeping for a live quiz poll (`/quiz`).
///
/// No local counter: the closing condition comes from the platform's own
/// aggregate voter count carried on poll updates.
#[derive(Debug, Clone)]
pub struct QuizTicket {
    /// Chat the quiz was sent to.
    pub chat_id: ChatId,
    /// Message carrying the quiz, needed to stop it.
    pub message_id: MessageId,
}

#[derive(Debug, Clone)]
enum PollTicket {
    Survey(SurveyTicket),
    Quiz(QuizTicket),
}

/// Outcome of recording a survey vote: what to announce, and whether the
/// target was just reached and the poll should be stopped.
#[derive(Debug, Clone)]
pub struct SurveyVote {
    /// Chat to send the announcement to.
    pub chat_id: ChatId,
    /// The voter's selected option labels joined with " and ".
    pub summary: String,
    /// Present exactly once, on the vote that reaches the target.
    pub close: Option<MessageId>,
}

/// In-memory registry of the demo polls this process has sent.
#[derive(Debug, Default)]
pub struct PollRegistry {
    tickets: HashMap<String, PollTicket>,
}

impl PollRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a freshly sent survey poll.
    pub fn register_survey(
        &mut self,
        poll_id: String,
        chat_id: ChatId,
        message_id: MessageId,
        options: Vec<String>,
    ) {
        self.tickets.insert(
            poll_id,
            PollTicket::Survey(SurveyTicket {
                chat_id,
                message_id,
                options,
                answers: 0,
            }),
        );
    }

    /// Track a freshly sent quiz poll.
    pub fn register_quiz(&mut self, poll_id: String, chat_id: ChatId, message_id: MessageId) {
        self.tickets
            .insert(poll_id, PollTicket::Quiz(QuizTicket { chat_id, message_id }));
    }

    /// Record one answer event against a survey.
    ///
    /// Returns `None` for unknown or non-survey poll ids (stale events,
    /// ignored by design). Otherwise returns the announcement to send and,
    /// when this event is the one that reaches `target`, the message id of
    /// the poll to stop.
    pub fn record_survey_answer(
        &mut self,
        poll_id: &str,
        selected: &[i32],
        target: i32,
    ) -> Option<SurveyVote> {
        let ticket = match self.tickets.get_mut(poll_id) {
            Some(PollTicket::Survey(ticket)) => ticket,
            _ => return None,
        };

        let labels: Vec<String> = selected
            .iter()
            .filter_map(|&index| usize::try_from(index).ok())
            .filter_map(|index| ticket.options.get(index))
            .cloned()
            .collect();

        ticket.answers += 1;
        let close = (ticket.answers == target).then_some(ticket.message_id);

        Some(SurveyVote {
            chat_id: ticket.chat_id,
            summary: join_with_and(&labels),
            close,
        })
    }

    /// Decide whether a poll update should stop a quiz.
    ///
    /// Updates for already-closed polls are ignored unconditionally, as are
    /// counts other than `target` and ids the registry does not track.
    pub fn quiz_close_target(
        &self,
        poll_id: &str,
        is_closed: bool,
        total_voter_count: i32,
        target: i32,
    ) -> Option<(ChatId, MessageId)> {
        if is_closed || total_voter_count != target {
            return None;
        }
        match self.tickets.get(poll_id) {
            Some(PollTicket::Quiz(ticket)) => Some((ticket.chat_id, ticket.message_id)),
            _ => None,
        }
    }

    /// Whether the registry holds any ticket for `poll_id`.
    pub fn contains(&self, poll_id: &str) -> bool {
        self.tickets.contains_key(poll_id)
    }

    /// Number of tracked polls.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True when nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
