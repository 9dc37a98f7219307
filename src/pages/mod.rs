//! Page assembly: validate the system id, fetch from PluralKit, build the view model, render.
//!
//! Both page variants share one pipeline; [`PageMode`] selects the validation rule, the view
//! model and the templates.

use crate::errors::AppError;
use crate::templates::{FOOTER, FRONTER, FRONT_SIMPLE, HEADER};
use crate::view::{build_full_page, build_simple_page};
use crate::AppState;

/// Length of a PluralKit system id.
const SYSTEM_ID_LEN: usize = 5;

/// Which page to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Every current fronter with descriptions, wrapped in the site header and footer.
    Full,
    /// Single-fronter summary card.
    Simple,
}

impl PageMode {
    /// Check a system id before anything goes over the network.
    ///
    /// Full pages accept any non-empty id and let the API decide whether it exists.
    pub fn validate_identifier(self, id: &str) -> Result<(), AppError> {
        if id.is_empty() {
            return Err(AppError::EmptyIdentifier);
        }

        match self {
            PageMode::Full => Ok(()),
            PageMode::Simple if is_system_id(id) => Ok(()),
            PageMode::Simple => Err(AppError::InvalidIdentifierFormat(id.to_string())),
        }
    }
}

/// Exactly five lowercase ASCII letters.
fn is_system_id(id: &str) -> bool {
    id.len() == SYSTEM_ID_LEN && id.bytes().all(|b| b.is_ascii_lowercase())
}

/// Produce the HTML for one page request.
pub async fn assemble(state: &AppState, mode: PageMode, id: &str) -> Result<String, AppError> {
    mode.validate_identifier(id)?;

    // System first, then fronters; never concurrently.
    let system = state.pluralkit.get_system(id).await?;
    let front = state.pluralkit.get_fronters(id).await?;

    tracing::debug!(
        system = %system.id,
        fronters = front.members.len(),
        ?mode,
        "Fetched front"
    );

    match mode {
        PageMode::Full => {
            let page = build_full_page(&system, &front)?;
            state
                .templates
                .render_all(&[HEADER, FRONTER, FOOTER], &page)
        }
        PageMode::Simple => {
            let page = build_simple_page(&system, &front)?;
            state.templates.render_all(&[FRONT_SIMPLE], &page)
        }
    }
}
