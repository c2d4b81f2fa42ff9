use crate::app::render::render;
use crate::core::form::{Completion, FactForm};
use crate::core::{FactSource, Month};
use crate::utils::error::{FactError, Result};

/// Runs the form once for the given selection and returns the rendered form with its fact.
///
/// A rejected day comes back as `FactError::ValidationError` carrying the inline message;
/// fetch failures come back as the fetch error itself.
pub async fn lookup_once(source: &dyn FactSource, month: Month, day: &str) -> Result<String> {
    let mut form = FactForm::new();
    form.select_month(Some(month));

    let Some(ticket) = form.enter_day(day) else {
        return Err(FactError::ValidationError {
            message: form.error().unwrap_or("Invalid selection").to_string(),
        });
    };

    tracing::info!("Looking up a fact for {} {}", month, ticket.day.day);
    let fact = source.fetch_fact(ticket.day).await?;

    // Nothing else touches the form between enter_day and complete, so the ticket is current.
    let completion = form.complete(ticket, Ok(fact));
    debug_assert_eq!(completion, Completion::Shown);
    Ok(render(&form))
}
