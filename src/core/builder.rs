//! Row builder: the per-session prompt state machine.
//!
//! A row is collected across several inbound messages. Each call to
//! [`RowBuilder::feed`] consumes one message and performs one transition;
//! automatic fields (date, name, times, highlight) are resolved on the way.
//!
//! ```text
//! Idle -> NationalCode -> DriverName -> Items -> InvoiceNumber -> Category -> Idle
//! ```

use crate::core::validator;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Field, InvoiceNumber, NationalCode, Row};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

/// What the builder needs to know about the world for one step.
pub struct BuildContext<'a> {
    /// Rows already completed in this session.
    pub existing: &'a [Row],
    /// Supervisor name from the user's profile.
    pub name: &'a str,
    pub now: NaiveDateTime,
}

/// Result of an accepted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The builder moved on and now waits for `field`.
    Awaiting {
        field: Field,
        /// Set once, right after a national code seen on an earlier date.
        returning_driver: bool,
    },
    /// Last field accepted; the row is ready to be stored.
    Completed(Row),
}

#[derive(Debug, Clone)]
struct Opened {
    date: NaiveDate,
    name: String,
}

#[derive(Debug, Clone)]
struct Identified {
    opened: Opened,
    national_code: NationalCode,
    highlight: bool,
}

#[derive(Debug, Clone)]
struct Invoiced {
    identified: Identified,
    driver_name: String,
    items: String,
    invoice_no: InvoiceNumber,
    time_out: NaiveTime,
    time_in: NaiveTime,
}

#[derive(Debug, Clone, Default)]
enum Stage {
    #[default]
    Idle,
    NationalCode(Opened),
    DriverName(Identified),
    Items(Identified, String),
    InvoiceNumber(Identified, String, String),
    Category(Invoiced),
}

type Step = Result<(Stage, Progress), (Stage, AppError)>;

#[derive(Debug, Clone, Default)]
pub struct RowBuilder {
    stage: Stage,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field the builder is waiting for, `None` when no row is in progress.
    pub fn awaiting(&self) -> Option<Field> {
        match self.stage {
            Stage::Idle => None,
            Stage::NationalCode(_) => Some(Field::NationalCode),
            Stage::DriverName(_) => Some(Field::DriverName),
            Stage::Items(..) => Some(Field::Items),
            Stage::InvoiceNumber(..) => Some(Field::InvoiceNumber),
            Stage::Category(_) => Some(Field::Category),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.stage, Stage::Idle)
    }

    /// Drop the row in progress. Returns false if there was none.
    pub fn reset(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.stage), Stage::Idle)
    }

    /// Consume one inbound message.
    ///
    /// On error the builder stays on the same field; the error tells the
    /// caller what to say before asking again.
    pub fn feed(&mut self, input: &str, ctx: &BuildContext<'_>) -> AppResult<Progress> {
        match advance(std::mem::take(&mut self.stage), input, ctx) {
            Ok((stage, progress)) => {
                self.stage = stage;
                Ok(progress)
            }
            Err((stage, e)) => {
                self.stage = stage;
                Err(e)
            }
        }
    }
}

fn awaiting(field: Field) -> Progress {
    Progress::Awaiting {
        field,
        returning_driver: false,
    }
}

fn advance(stage: Stage, input: &str, ctx: &BuildContext<'_>) -> Step {
    match stage {
        // Any text opens a new row. A valid code is taken as the first
        // field right away; anything else just triggers the prompt.
        Stage::Idle => {
            let opened = Opened {
                date: ctx.now.date(),
                name: ctx.name.to_string(),
            };
            if validator::national_code(input).is_ok() {
                return advance(Stage::NationalCode(opened), input, ctx);
            }
            Ok((Stage::NationalCode(opened), awaiting(Field::NationalCode)))
        }

        Stage::NationalCode(opened) => match identify(&opened, input, ctx.existing) {
            Ok((national_code, highlight)) => {
                let identified = Identified {
                    opened,
                    national_code,
                    highlight,
                };
                Ok((
                    Stage::DriverName(identified),
                    Progress::Awaiting {
                        field: Field::DriverName,
                        returning_driver: highlight,
                    },
                ))
            }
            Err(e) => Err((Stage::NationalCode(opened), e)),
        },

        Stage::DriverName(identified) => match validator::free_text(Field::DriverName, input) {
            Ok(driver_name) => Ok((Stage::Items(identified, driver_name), awaiting(Field::Items))),
            Err(e) => Err((Stage::DriverName(identified), e)),
        },

        Stage::Items(identified, driver_name) => match validator::free_text(Field::Items, input) {
            Ok(items) => Ok((
                Stage::InvoiceNumber(identified, driver_name, items),
                awaiting(Field::InvoiceNumber),
            )),
            Err(e) => Err((Stage::Items(identified, driver_name), e)),
        },

        Stage::InvoiceNumber(identified, driver_name, items) => {
            match validator::invoice_number(input) {
                Ok(invoice_no) => {
                    // Both times are taken when the invoice is accepted.
                    let time_out = ctx.now.time();
                    let time_in = ctx.now.time();
                    let invoiced = Invoiced {
                        identified,
                        driver_name,
                        items,
                        invoice_no,
                        time_out,
                        time_in,
                    };
                    Ok((Stage::Category(invoiced), awaiting(Field::Category)))
                }
                Err(e) => Err((Stage::InvoiceNumber(identified, driver_name, items), e)),
            }
        }

        Stage::Category(invoiced) => match validator::category(input) {
            Ok(category) => Ok((Stage::Idle, Progress::Completed(finish(invoiced, category)))),
            Err(e) => Err((Stage::Category(invoiced), e)),
        },
    }
}

/// Validate the code and apply the duplicate / highlight policy.
fn identify(opened: &Opened, input: &str, existing: &[Row]) -> AppResult<(NationalCode, bool)> {
    let code = validator::national_code(input)?;

    let mut highlight = false;
    for row in existing.iter().filter(|r| r.national_code == code) {
        if row.date == opened.date {
            debug!(national_code = %code, date = %opened.date, "duplicate national code rejected");
            return Err(AppError::DuplicateEntry(code.to_string()));
        }
        highlight = true;
    }

    Ok((code, highlight))
}

fn finish(invoiced: Invoiced, category: Category) -> Row {
    let Invoiced {
        identified,
        driver_name,
        items,
        invoice_no,
        time_out,
        time_in,
    } = invoiced;

    Row {
        date: identified.opened.date,
        name: identified.opened.name,
        national_code: identified.national_code,
        driver_name,
        items,
        invoice_no,
        time_out,
        time_in,
        category,
        highlight: identified.highlight,
    }
}
