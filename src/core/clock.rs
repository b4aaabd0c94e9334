use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};
use std::cell::Cell;
use std::rc::Rc;

/// Source of wall-clock time for dates and time stamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(Rc<Cell<NaiveDateTime>>);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(Rc::new(Cell::new(at)))
    }

    /// Parse `YYYY-MM-DD HH:MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
            .map(Self::new)
            .map_err(|_| AppError::InvalidDateTime(s.to_string()))
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.0.set(at);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
