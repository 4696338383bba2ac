pub mod answers;
pub mod broadcast;
pub mod leaderboard;
pub mod raffle;
pub mod whitelist;

use teloxide::utils::command::{BotCommands, ParseError};

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Answer raffle bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(rename = "rprun", description = "Introduce the bot")]
    Start,
    #[command(rename = "add", description = "Record an answer (send as a reply to it)")]
    Add,
    #[command(rename = "plus", description = "Record an answer (send as a reply to it)")]
    Plus,
    #[command(rename = "rprlb", description = "Show the leaderboard")]
    Leaderboard,
    #[command(rename = "rpr_table", description = "Show the leaderboard")]
    Table,
    #[command(
        rename = "minus",
        parse_with = raw_argument,
        description = "Delete an answer by its number"
    )]
    Minus { number: String },
    #[command(
        rename = "del",
        parse_with = raw_argument,
        description = "Delete an answer by its number"
    )]
    Del { number: String },
    #[command(rename = "rpr", description = "Draw a winner from the ticket pool")]
    Roll,
    #[command(
        rename = "rpr_modify",
        parse_with = raw_argument,
        description = "Exclude a user from the draw (numeric id, or send as a reply)"
    )]
    Exclude { target: String },
    #[command(
        rename = "rpr_wladd",
        parse_with = raw_argument,
        description = "Add a user to the whitelist"
    )]
    WhitelistAdd { user_id: String },
    #[command(
        rename = "rpr_wldel",
        parse_with = raw_argument,
        description = "Remove a user from the whitelist"
    )]
    WhitelistRemove { user_id: String },
    #[command(rename = "rpr_clearratio", description = "Clear the leaderboard and answer list")]
    ClearRatio,
    #[command(description = "Send an announcement to the broadcast channel")]
    Broadcast,
}

/// Passes the raw argument tail through so handlers can reply with a usage
/// hint when it is missing or malformed, instead of the command silently
/// failing to parse.
fn raw_argument(input: String) -> Result<(String,), ParseError> {
    Ok((input.trim().to_string(),))
}
