use group_schedule_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert!(matches!(result, Ok(Command::Help)));
    }

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/start", "testbot");
        assert!(matches!(result, Ok(Command::Start)));
    }

    #[test]
    fn test_command_addressed_to_bot() {
        let result = Command::parse("/start@testbot", "testbot");
        assert!(matches!(result, Ok(Command::Start)));
    }

    #[test]
    fn test_group_names_are_not_commands() {
        assert!(Command::parse("М8О-207БВ-24", "testbot").is_err());
        assert!(Command::parse("/schedule", "testbot").is_err());
    }

    #[test]
    fn test_descriptions_list_commands() {
        let descriptions = Command::descriptions().to_string();
        assert!(descriptions.contains("/help"));
        assert!(descriptions.contains("/start"));
    }
}
