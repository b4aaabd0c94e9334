//! Outbound texts of the conversation.

use crate::core::bot::Reply;
use crate::errors::AppError;
use crate::models::{Category, Field};

pub const WELCOME: &str = "Welcome to the Excel Generator Bot! Send any message to start a new row, \
/cancelDiscount to remove the last saved row and /generate to get the Excel file.";
pub const UNKNOWN_COMMAND: &str = "Sorry, I don't understand that command.";

pub const DUPLICATE: &str = "This driver has purchased today. Please enter a new National Code.";
pub const RETURNING_DRIVER: &str =
    "This driver has purchased on a previous day. The row will be highlighted.";

pub const CANCELED: &str = "Canceled the current row. You can start again.";
pub const NOTHING_TO_CANCEL: &str = "No row to cancel.";
pub const RESET_DONE: &str = "Current entry discarded.";
pub const NOTHING_IN_PROGRESS: &str = "Nothing in progress.";

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

pub const NO_DATA: &str = "No data to generate Excel file.";
pub const EXPORT_FAILED: &str =
    "An error occurred while generating the Excel file. Please try again.";

/// Question asked when the builder starts waiting for `field`.
pub fn prompt(field: Field) -> Reply {
    match field {
        Field::NationalCode => Reply::text("Enter 10-digit National Code:"),
        Field::DriverName => Reply::text("Enter Snapp driver's name:"),
        Field::Items => Reply::text("Enter Items:"),
        Field::InvoiceNumber => Reply::text("Enter Invoice no:"),
        Field::Category => {
            let labels = Category::labels();
            Reply::keyboard(
                format!("Select one of the options: {}", labels.join(", ")),
                labels,
            )
        }
        other => Reply::text(format!("Enter {other}:")),
    }
}

/// Replies for input rejected by the validator: the complaint, then the
/// question again when the complaint does not already repeat it.
pub fn invalid(field: Field) -> Vec<Reply> {
    match field {
        Field::NationalCode => vec![Reply::text(
            "Invalid input. Please enter a 10-digit National Code.",
        )],
        Field::InvoiceNumber => vec![Reply::text("Please write numbers."), prompt(field)],
        Field::Category => vec![Reply::text("Please pick one of the options."), prompt(field)],
        _ => vec![Reply::text("This field cannot be empty."), prompt(field)],
    }
}

/// Replies for a field input the builder did not accept.
pub fn rejected(err: &AppError) -> Vec<Reply> {
    match err {
        AppError::InvalidFormat(field) => invalid(*field),
        AppError::DuplicateEntry(_) => vec![Reply::text(DUPLICATE)],
        _ => vec![Reply::text(GENERIC_ERROR)],
    }
}

pub fn row_saved(count: usize) -> Reply {
    Reply::text(format!(
        "Row saved ({count} in this session). Send any message to add another row or /generate to export."
    ))
}
