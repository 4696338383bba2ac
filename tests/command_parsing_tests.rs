use answer_raffle_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Help));
    }

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/rprun", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Start));
    }

    #[test]
    fn test_add_synonyms_parsing() {
        assert!(matches!(
            Command::parse("/add", "testbot").unwrap(),
            Command::Add
        ));
        assert!(matches!(
            Command::parse("/plus", "testbot").unwrap(),
            Command::Plus
        ));
    }

    #[test]
    fn test_leaderboard_synonyms_parsing() {
        assert!(matches!(
            Command::parse("/rprlb", "testbot").unwrap(),
            Command::Leaderboard
        ));
        assert!(matches!(
            Command::parse("/rpr_table", "testbot").unwrap(),
            Command::Table
        ));
    }

    #[test]
    fn test_minus_command_with_number() {
        match Command::parse("/minus 3", "testbot").unwrap() {
            Command::Minus { number } => assert_eq!(number, "3"),
            other => panic!("Expected Minus, got {other:?}"),
        }
    }

    #[test]
    fn test_minus_command_without_number_still_parses() {
        // The handler replies with usage; parsing must not eat the command.
        match Command::parse("/minus", "testbot").unwrap() {
            Command::Minus { number } => assert_eq!(number, ""),
            other => panic!("Expected Minus, got {other:?}"),
        }
    }

    #[test]
    fn test_del_command_parsing() {
        match Command::parse("/del 12", "testbot").unwrap() {
            Command::Del { number } => assert_eq!(number, "12"),
            other => panic!("Expected Del, got {other:?}"),
        }
    }

    #[test]
    fn test_roll_command_parsing() {
        assert!(matches!(
            Command::parse("/rpr", "testbot").unwrap(),
            Command::Roll
        ));
    }

    #[test]
    fn test_exclude_command_parsing() {
        match Command::parse("/rpr_modify 7780504410", "testbot").unwrap() {
            Command::Exclude { target } => assert_eq!(target, "7780504410"),
            other => panic!("Expected Exclude, got {other:?}"),
        }
    }

    #[test]
    fn test_whitelist_commands_parsing() {
        match Command::parse("/rpr_wladd 42", "testbot").unwrap() {
            Command::WhitelistAdd { user_id } => assert_eq!(user_id, "42"),
            other => panic!("Expected WhitelistAdd, got {other:?}"),
        }
        match Command::parse("/rpr_wldel 42", "testbot").unwrap() {
            Command::WhitelistRemove { user_id } => assert_eq!(user_id, "42"),
            other => panic!("Expected WhitelistRemove, got {other:?}"),
        }
    }

    #[test]
    fn test_clear_command_parsing() {
        assert!(matches!(
            Command::parse("/rpr_clearratio", "testbot").unwrap(),
            Command::ClearRatio
        ));
    }

    #[test]
    fn test_broadcast_command_parsing() {
        assert!(matches!(
            Command::parse("/broadcast", "testbot").unwrap(),
            Command::Broadcast
        ));
    }

    #[test]
    fn test_unknown_command_fails_to_parse() {
        assert!(Command::parse("/unknown", "testbot").is_err());
        assert!(Command::parse("not a command", "testbot").is_err());
    }

    #[test]
    fn test_commands_with_bot_name_suffix() {
        assert!(matches!(
            Command::parse("/rpr@testbot", "testbot").unwrap(),
            Command::Roll
        ));
    }
}
