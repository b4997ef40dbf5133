use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/about", "About this assistant and its limits"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/lang", "Show or change the language"),
    ("/quit", "Exit chat mode"),
    ("/reset", "Clear the assistant's memory of this conversation"),
    ("/resources", "Get resources on the latest topic"),
    ("/status", "Show API health and readiness"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    About,
    Config,
    Help,
    History,
    Lang(Option<String>),
    Quit,
    Reset,
    Resources,
    Status,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("about") => Input::Command(SlashCommand::About),
        Some("config") => Input::Command(SlashCommand::Config),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("history") => Input::Command(SlashCommand::History),
        Some("lang" | "language") => Input::Command(SlashCommand::Lang(
            parts.get(1).map(|s| (*s).to_string()),
        )),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        Some("reset") => Input::Command(SlashCommand::Reset),
        Some("resources" | "r") => Input::Command(SlashCommand::Resources),
        Some("status") => Input::Command(SlashCommand::Status),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input_is_trimmed() {
        assert_eq!(
            parse_input("  I feel anxious today \n"),
            Input::Text("I feel anxious today".to_string())
        );
    }

    #[test]
    fn test_parse_resources_command() {
        assert_eq!(
            parse_input("/resources"),
            Input::Command(SlashCommand::Resources)
        );
        assert_eq!(parse_input("/r"), Input::Command(SlashCommand::Resources));
    }

    #[test]
    fn test_parse_lang_command() {
        assert_eq!(
            parse_input("/lang hi"),
            Input::Command(SlashCommand::Lang(Some("hi".to_string())))
        );
        assert_eq!(parse_input("/lang"), Input::Command(SlashCommand::Lang(None)));
        assert_eq!(
            parse_input("/language en"),
            Input::Command(SlashCommand::Lang(Some("en".to_string())))
        );
    }

    #[test]
    fn test_parse_quit_commands() {
        for input in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(input), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_input("/status"), Input::Command(SlashCommand::Status));
        assert_eq!(parse_input("/reset"), Input::Command(SlashCommand::Reset));
        assert_eq!(parse_input("/history"), Input::Command(SlashCommand::History));
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_about_command() {
        assert_eq!(parse_input("/about"), Input::Command(SlashCommand::About));
        assert_eq!(parse_input("  /about  "), Input::Command(SlashCommand::About));
    }

    #[test]
    fn test_completer_suggests_about() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/a").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/about"));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown thing"),
            Input::Command(SlashCommand::Unknown("unknown thing".to_string()))
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/re").unwrap();
        assert_eq!(suggestions.len(), 2); // /reset, /resources

        let suggestions = completer.get_suggestions("/s").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/status"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/resources  Get resources on the latest topic".to_string();
        let completion = completer.get_completion("/res", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/resources".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
