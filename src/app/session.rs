use crate::app::render::{render, render_alert};
use crate::core::form::{Completion, FactForm, FetchTicket};
use crate::core::{Fact, FactSource, Month, Result};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

pub const USAGE: &str = "Commands: month <1-12|name|none>, day <number>, show, help, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Month(Option<Month>),
    Day(String),
    Show,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "month" | "m" => match rest {
                "" | "none" => Command::Month(None),
                value => match value.parse::<Month>() {
                    Ok(month) => Command::Month(Some(month)),
                    Err(e) => Command::Invalid(e.to_string()),
                },
            },
            "day" | "d" => Command::Day(rest.to_string()),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Invalid(format!("unknown command `{}`", other)),
        };
        Some(command)
    }
}

/// Line-driven stand-in for the single-screen form. Each edit is validated right away and
/// a valid selection starts a fetch without blocking further input.
pub struct FormSession<W: Write> {
    form: FactForm,
    source: Arc<dyn FactSource>,
    out: W,
    in_flight: JoinSet<(FetchTicket, Result<Fact>)>,
}

impl<W: Write> FormSession<W> {
    pub fn new(source: Arc<dyn FactSource>, out: W) -> Self {
        Self {
            form: FactForm::new(),
            source,
            out,
            in_flight: JoinSet::new(),
        }
    }

    pub fn form(&self) -> &FactForm {
        &self.form
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `quit` or end of input. At end of input, outstanding fetches are awaited;
    /// `quit` abandons them.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        let mut input_open = true;

        writeln!(self.out, "{}\n{}\n", render(&self.form), USAGE)?;

        loop {
            if !input_open && self.in_flight.is_empty() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) => {
                            let Some(command) = Command::parse(&line) else { continue };
                            if !self.handle(command)? {
                                self.in_flight.abort_all();
                                break;
                            }
                        }
                        None => {
                            tracing::debug!(outstanding = self.in_flight.len(), "Input closed");
                            input_open = false;
                        }
                    }
                }
                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    match joined {
                        Ok((ticket, result)) => self.finish(ticket, result)?,
                        Err(e) => tracing::error!("Fetch task ended abnormally: {}", e),
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle(&mut self, command: Command) -> Result<bool> {
        let ticket = match command {
            Command::Month(month) => self.form.select_month(month),
            Command::Day(text) => self.form.enter_day(&text),
            Command::Show => None,
            Command::Help => {
                writeln!(self.out, "{}\n", USAGE)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
            Command::Invalid(message) => {
                writeln!(self.out, "{}\n{}\n", message, USAGE)?;
                return Ok(true);
            }
        };

        if let Some(ticket) = ticket {
            self.start_fetch(ticket);
        }
        writeln!(self.out, "{}\n", render(&self.form))?;
        Ok(true)
    }

    fn start_fetch(&mut self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        self.in_flight.spawn(async move {
            let result = source.fetch_fact(ticket.day).await;
            (ticket, result)
        });
    }

    fn finish(&mut self, ticket: FetchTicket, result: Result<Fact>) -> Result<()> {
        match self.form.complete(ticket, result) {
            Completion::Shown => writeln!(self.out, "{}\n", render(&self.form))?,
            Completion::Alert(alert) => {
                writeln!(self.out, "{}\n{}\n", render_alert(&alert), render(&self.form))?
            }
            Completion::Stale => {}
        }
        Ok(())
    }
}
