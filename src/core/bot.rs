//! Command dispatcher.
//!
//! [`Bot`] owns the session store, the clock and the exporter. Each inbound
//! message is handled to completion and turned into a list of [`Reply`]
//! values; sending them is up to the transport.

use crate::core::builder::{BuildContext, Progress};
use crate::core::clock::Clock;
use crate::core::prompts;
use crate::core::session::{SessionStore, UserId};
use crate::errors::AppError;
use crate::export::Exporter;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// One outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text {
        text: String,
        /// One-time reply keyboard, one button per entry.
        keyboard: Option<Vec<String>>,
    },
    Document {
        path: PathBuf,
        file_name: String,
    },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn keyboard(text: impl Into<String>, buttons: Vec<&str>) -> Self {
        Reply::Text {
            text: text.into(),
            keyboard: Some(buttons.into_iter().map(str::to_string).collect()),
        }
    }

    /// Text of a text reply, `None` for documents.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text { text, .. } => Some(text),
            Reply::Document { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    Generate,
    CancelDiscount,
    Reset,
    Name(Option<&'a str>),
    Status,
    Unknown(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound<'a> {
    Command(Command<'a>),
    Text(&'a str),
}

/// Split an inbound message into a command or plain text.
///
/// Command names are matched case-insensitively and a trailing `@botname`
/// on the command token is ignored.
pub fn parse(message: &str) -> Inbound<'_> {
    let trimmed = message.trim_start();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Inbound::Text(message);
    };

    let (token, args) = match rest.split_once(char::is_whitespace) {
        Some((token, args)) => (token, args.trim()),
        None => (rest, ""),
    };
    let name = token.split('@').next().unwrap_or(token);

    let cmd = match name.to_ascii_lowercase().as_str() {
        "start" => Command::Start,
        "generate" => Command::Generate,
        "canceldiscount" => Command::CancelDiscount,
        "reset" => Command::Reset,
        "name" => Command::Name((!args.is_empty()).then_some(args)),
        "status" => Command::Status,
        _ => Command::Unknown(token),
    };
    Inbound::Command(cmd)
}

pub struct Bot<C: Clock> {
    store: SessionStore,
    clock: C,
    exporter: Exporter,
    default_name: String,
}

impl<C: Clock> Bot<C> {
    pub fn new(clock: C, exporter: Exporter) -> Self {
        Self {
            store: SessionStore::new(),
            clock,
            exporter,
            default_name: String::new(),
        }
    }

    /// Name column value for users who never sent /name.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    /// Handle one inbound message from `user`.
    pub fn handle(&mut self, user: UserId, message: &str) -> Vec<Reply> {
        match parse(message) {
            Inbound::Command(Command::Start) => vec![Reply::text(prompts::WELCOME)],
            Inbound::Command(Command::Generate) => self.generate(user),
            Inbound::Command(Command::CancelDiscount) => self.cancel_discount(user),
            Inbound::Command(Command::Reset) => self.reset(user),
            Inbound::Command(Command::Name(name)) => self.name(user, name),
            Inbound::Command(Command::Status) => self.status(user),
            Inbound::Command(Command::Unknown(token)) => {
                info!(user, command = token, "unknown command");
                vec![Reply::text(prompts::UNKNOWN_COMMAND)]
            }
            Inbound::Text(text) => self.field_input(user, text),
        }
    }

    fn profile_name(&self, user: UserId) -> String {
        match self.store.name(user) {
            "" => self.default_name.clone(),
            name => name.to_string(),
        }
    }

    fn field_input(&mut self, user: UserId, text: &str) -> Vec<Reply> {
        let now = self.clock.now();
        let name = self.profile_name(user);

        let session = self.store.get_or_create(user);
        let ctx = BuildContext {
            existing: &session.rows,
            name: &name,
            now,
        };

        match session.builder.feed(text, &ctx) {
            Ok(Progress::Awaiting {
                field,
                returning_driver,
            }) => {
                let mut replies = Vec::with_capacity(2);
                if returning_driver {
                    replies.push(Reply::text(prompts::RETURNING_DRIVER));
                }
                replies.push(prompts::prompt(field));
                replies
            }
            Ok(Progress::Completed(row)) => {
                info!(user, national_code = %row.national_code, highlight = row.highlight, "row stored");
                self.store.append_row(user, row);
                vec![prompts::row_saved(self.store.rows(user).len())]
            }
            Err(e) => {
                if !matches!(e, AppError::InvalidFormat(_) | AppError::DuplicateEntry(_)) {
                    error!(user, error = %e, "unexpected builder error");
                }
                prompts::rejected(&e)
            }
        }
    }

    fn generate(&mut self, user: UserId) -> Vec<Reply> {
        match self.exporter.export(user, self.store.rows(user)) {
            Ok(exported) => {
                self.store.clear(user);
                vec![Reply::Document {
                    path: exported.path,
                    file_name: exported.file_name,
                }]
            }
            Err(AppError::NoDataToExport) => vec![Reply::text(prompts::NO_DATA)],
            Err(e) => {
                error!(user, error = %e, "error creating Excel file");
                vec![Reply::text(prompts::EXPORT_FAILED)]
            }
        }
    }

    fn cancel_discount(&mut self, user: UserId) -> Vec<Reply> {
        match self.store.pop_last_row(user) {
            Ok(row) => {
                info!(user, national_code = %row.national_code, "last row canceled");
                vec![Reply::text(prompts::CANCELED)]
            }
            Err(_) => vec![Reply::text(prompts::NOTHING_TO_CANCEL)],
        }
    }

    fn reset(&mut self, user: UserId) -> Vec<Reply> {
        let discarded = self
            .store
            .get_mut(user)
            .is_some_and(|s| s.builder.reset());

        if discarded {
            warn!(user, "row in progress discarded");
            vec![Reply::text(prompts::RESET_DONE)]
        } else {
            vec![Reply::text(prompts::NOTHING_IN_PROGRESS)]
        }
    }

    fn name(&mut self, user: UserId, name: Option<&str>) -> Vec<Reply> {
        match name {
            Some(name) => {
                self.store.set_name(user, name);
                vec![Reply::text(format!("Name set to {name}."))]
            }
            None => match self.profile_name(user).as_str() {
                "" => vec![Reply::text("No name set. Use /name <your name>.")],
                current => vec![Reply::text(format!("Current name: {current}."))],
            },
        }
    }

    fn status(&self, user: UserId) -> Vec<Reply> {
        let Some(session) = self.store.get(user) else {
            return vec![Reply::text("No rows yet. Send any message to start.")];
        };

        let waiting = match session.builder.awaiting() {
            Some(field) => format!("Waiting for: {field}."),
            None => prompts::NOTHING_IN_PROGRESS.to_string(),
        };
        vec![Reply::text(format!(
            "Rows in this session: {}. {waiting}",
            session.rows.len()
        ))]
    }
}
