//! Visit date picking.

use crate::session::EditorSession;
use hillfort_core::{HillfortResult, VisitDate};
use tracing::debug;

/// A date chosen in the picker plus its display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedDate {
    pub date: VisitDate,
    pub display: String,
}

/// Render a visit date with a validated strftime pattern.
pub fn format_visit_date(date: VisitDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

impl EditorSession {
    /// Show the date picker seeded with the draft's date, or `today`.
    ///
    /// A picked date is stored on the draft. Cancel returns `Ok(None)`.
    pub async fn pick_date(&mut self, today: VisitDate) -> HillfortResult<Option<PickedDate>> {
        self.ensure_open()?;
        let seed = self.draft.record().date_visited.unwrap_or(today);

        let Some(date) = self.ctx.dates.pick_date(seed).await else {
            debug!("Date picker cancelled");
            return Ok(None);
        };

        self.draft.set_date(date);
        let display = format_visit_date(date, &self.ctx.config.date_format);
        let shown: &str = &display;
        debug!(display = %shown, "Visit date picked");
        Ok(Some(PickedDate { date, display }))
    }
}
