//! Questionnaire definition: the fixed, ordered set of questions the bot
//! walks a user through, plus the lookups the export path needs.

pub mod engine;

use serde::{Deserialize, Serialize};

/// How a single question is asked and answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Asked as a non-anonymous single-answer poll; the stored answer is the
    /// zero-based index of the selected option, stringified.
    MultipleChoice {
        /// Ordered option labels shown to the user.
        options: Vec<String>,
    },
    /// Asked as a plain message; the stored answer is the user's reply text.
    OpenEnded,
}

/// One question in the questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique, stable identifier; doubles as the spreadsheet column name.
    pub id: String,
    /// The text sent to the user.
    pub prompt: String,
    /// Multiple choice or open ended.
    pub kind: QuestionKind,
}

impl Question {
    /// A multiple-choice question with the given option labels.
    pub fn multiple_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::MultipleChoice { options },
        }
    }

    /// An open-ended question answered with free text.
    pub fn open_ended(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::OpenEnded,
        }
    }

    /// Resolve a raw stored answer to the text that goes into the spreadsheet.
    ///
    /// Multiple-choice answers are stored as stringified option indices and
    /// come back as the option label. Anything unresolvable (missing answer,
    /// index out of range) becomes an empty cell rather than an error.
    pub fn resolve_answer(&self, raw: &str) -> String {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => raw
                .parse::<usize>()
                .ok()
                .and_then(|index| options.get(index))
                .cloned()
                .unwrap_or_default(),
            QuestionKind::OpenEnded => raw.to_owned(),
        }
    }
}

/// An ordered sequence of questions, fixed at process start.
///
/// Question ids are unique and stable for the process lifetime; the sequence
/// order defines both the asking order and the spreadsheet column order.
#[derive(Debug, Clone)]
pub struct QuestionnaireDefinition {
    questions: Vec<Question>,
}

impl QuestionnaireDefinition {
    /// Create a definition from an ordered list of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|pair| pair[0] != pair[1])
            },
            "question ids must be unique"
        );
        Self { questions }
    }

    /// The built-in questionnaire the `/start` command runs.
    pub fn default_survey() -> Self {
        Self::new(vec![
            Question::multiple_choice(
                "favorite_color",
                "What's your favorite color?",
                vec![
                    "Red".to_owned(),
                    "Blue".to_owned(),
                    "Green".to_owned(),
                    "Yellow".to_owned(),
                ],
            ),
            Question::multiple_choice(
                "favorite_car",
                "What's your favorite car?",
                vec![
                    "Renault".to_owned(),
                    "Nissan".to_owned(),
                    "Toyota".to_owned(),
                    "Skoda".to_owned(),
                ],
            ),
            Question::open_ended("ideal_vacation", "Describe your ideal vacation:"),
        ])
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when the definition has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at `index`, if any.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by its id.
    pub fn question_by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// All questions in asking order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
