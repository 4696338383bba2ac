use anyhow::{anyhow, Result};

/// Telegram caps a message at 4096 characters; an announcement must fit in
/// a single message.
const MAX_BROADCAST_LEN: usize = 4096;

pub fn parse_answer_number(arg: &str) -> Result<u32> {
    let arg = arg.trim();

    if arg.is_empty() {
        return Err(anyhow!("Answer number is required"));
    }

    let number: u32 = arg
        .parse()
        .map_err(|_| anyhow!("'{}' is not an answer number", arg))?;

    if number == 0 {
        return Err(anyhow!("Answer numbers start at 1"));
    }

    Ok(number)
}

pub fn parse_user_id(arg: &str) -> Result<u64> {
    let arg = arg.trim();

    if arg.is_empty() {
        return Err(anyhow!("User id is required"));
    }

    // @username arguments cannot be resolved through the Bot API; callers
    // tell the user to reply to a message or pass the numeric id instead.
    if arg.starts_with('@') {
        return Err(anyhow!("Usernames cannot be looked up, use the numeric id"));
    }

    arg.parse()
        .map_err(|_| anyhow!("'{}' is not a user id", arg))
}

pub fn validate_broadcast_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(anyhow!("Announcement text cannot be empty"));
    }

    if text.chars().count() > MAX_BROADCAST_LEN {
        return Err(anyhow!(
            "Announcement text cannot be longer than {} characters",
            MAX_BROADCAST_LEN
        ));
    }

    Ok(())
}
