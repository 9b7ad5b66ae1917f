pub mod poll;
pub mod preview;
pub mod quiz;

use teloxide::utils::command::BotCommands;

/// The bot's command surface.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Questionnaire bot commands:")]
pub enum Command {
    #[command(description = "Begin the questionnaire")]
    Start,
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Send a demonstration poll")]
    Poll,
    #[command(description = "Send a demonstration quiz")]
    Quiz,
    #[command(description = "Generate a preview for your own poll")]
    Preview,
}

impl Command {
    /// Command name as logged, without the leading slash.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Poll => "poll",
            Command::Quiz => "quiz",
            Command::Preview => "preview",
        }
    }
}
