use crate::core::bot::Bot;
use crate::core::clock::Clock;
use crate::core::session::UserId;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::io::BufRead;
use tracing::debug;

/// Line-oriented transport: one line is one chat message.
///
/// - `@<id> <text>` sends `<text>` as user `<id>`
/// - any other line is sent as the default user
/// - blank lines and `#` comments are skipped
pub struct ConsoleTransport {
    default_user: UserId,
}

/// A single parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleMessage<'a> {
    pub user: UserId,
    pub text: &'a str,
}

impl ConsoleTransport {
    pub fn new(default_user: UserId) -> Self {
        Self { default_user }
    }

    /// Parse a line; `Ok(None)` for lines that carry no message.
    pub fn parse_line<'a>(&self, line: &'a str) -> AppResult<Option<ConsoleMessage<'a>>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let Some(rest) = trimmed.strip_prefix('@') else {
            return Ok(Some(ConsoleMessage {
                user: self.default_user,
                text: line,
            }));
        };

        let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let user = id
            .parse::<UserId>()
            .map_err(|_| AppError::InvalidUser(id.to_string()))?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        Ok(Some(ConsoleMessage { user, text }))
    }

    /// Feed every line of `input` to `bot`, printing replies as they come.
    /// Returns the number of messages handled.
    pub fn run<C: Clock, R: BufRead>(&self, bot: &mut Bot<C>, input: R) -> AppResult<usize> {
        let mut handled = 0;

        for line in input.lines() {
            let line = line?;

            let inbound = match self.parse_line(&line) {
                Ok(Some(inbound)) => inbound,
                Ok(None) => continue,
                Err(e) => {
                    messages::error(e);
                    continue;
                }
            };

            debug!(user = inbound.user, text = inbound.text, "inbound message");
            for reply in bot.handle(inbound.user, inbound.text) {
                messages::reply(&reply);
            }
            handled += 1;
        }

        Ok(handled)
    }
}
