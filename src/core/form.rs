use crate::core::validator::{self, DayError};
use crate::core::{Alert, Fact, Month, RequestState, Result, ValidDay};

/// Issued when an input change passes validation. Carries the generation it was issued in
/// so that only the latest request can update the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub day: ValidDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Shown,
    Alert(Alert),
    /// Superseded by a later input change; the form was not touched.
    Stale,
}

#[derive(Debug, Default)]
pub struct FactForm {
    month: Option<Month>,
    day_text: String,
    fact: Option<Fact>,
    error: Option<String>,
    state: RequestState,
    generation: u64,
}

impl FactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn day_text(&self) -> &str {
        &self.day_text
    }

    pub fn fact(&self) -> Option<&Fact> {
        self.fact.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn select_month(&mut self, month: Option<Month>) -> Option<FetchTicket> {
        self.month = month;
        self.revalidate()
    }

    pub fn enter_day(&mut self, day_text: &str) -> Option<FetchTicket> {
        self.day_text = day_text.to_string();
        self.revalidate()
    }

    fn revalidate(&mut self) -> Option<FetchTicket> {
        self.generation += 1;

        match validator::validate(self.month, &self.day_text) {
            Ok(day) => {
                self.error = None;
                self.fact = None;
                self.state = RequestState::Loading;
                tracing::debug!(
                    generation = self.generation,
                    month = day.month.number(),
                    day = day.day,
                    "Selection valid, starting fetch"
                );
                Some(FetchTicket {
                    generation: self.generation,
                    day,
                })
            }
            Err(DayError::MonthMissing) => {
                self.abandon_request();
                None
            }
            Err(err) => {
                tracing::debug!(generation = self.generation, "Selection rejected: {}", err);
                self.error = err.message();
                self.abandon_request();
                None
            }
        }
    }

    /// A rejected edit only tracks the inline error; the outcome of the last finished
    /// request stays as it was. A request still in flight is now stale.
    fn abandon_request(&mut self) {
        if self.state == RequestState::Loading {
            self.state = RequestState::Idle;
        }
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Fact>) -> Completion {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "Discarding superseded fetch result"
            );
            return Completion::Stale;
        }

        match result {
            Ok(fact) => {
                self.fact = Some(fact);
                self.state = RequestState::Succeeded;
                Completion::Shown
            }
            Err(e) => {
                tracing::warn!("Fact fetch failed: {}", e);
                self.fact = None;
                self.state = RequestState::Failed;
                Completion::Alert(Alert::fetch_failed())
            }
        }
    }
}
