// src/state/session.rs
use chrono::Utc;
use tracing::{debug, info};
use crate::config::{template_for_step, QuadrantTemplate};
use crate::file::AnalysisStore;
use super::{Analysis, AnalysisDraft, DraftField};

// Challenge + 4 quadrants + synthesis
pub const TOTAL_STEPS: usize = 6;
pub const LAST_STEP: usize = TOTAL_STEPS - 1;

/// Wizard controller: step cursor, the draft in progress, and which view is showing.
#[derive(Debug, Default)]
pub struct WizardSession {
    step: usize,
    pub draft: AnalysisDraft,
    show_history: bool,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn current_quadrant(&self) -> Option<&'static QuadrantTemplate> {
        template_for_step(self.step)
    }

    /// Fields that must be non-blank before leaving the current step.
    pub fn required_fields(&self) -> Vec<DraftField> {
        match self.step {
            0 => vec![DraftField::Challenge],
            1..=4 => self.current_quadrant()
                .map(|template| vec![DraftField::Quadrant(template.id)])
                .unwrap_or_default(),
            _ => vec![DraftField::Insights, DraftField::ActionPlan],
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.required_fields()
            .into_iter()
            .all(|field| self.draft.is_filled(field))
    }

    pub fn advance(&mut self) -> bool {
        if self.step >= LAST_STEP || !self.can_proceed() {
            return false;
        }
        self.step += 1;
        debug!(step = self.step, "Advanced wizard");
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        debug!(step = self.step, "Stepped back");
        true
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    /// Turns the draft into a completed analysis at the front of `store`, then
    /// resets the wizard and switches to history. The caller persists the store.
    pub fn complete(&mut self, store: &mut AnalysisStore) -> Option<Analysis> {
        if self.step != LAST_STEP || !self.can_proceed() {
            return None;
        }

        let analysis = std::mem::take(&mut self.draft).into_analysis(Utc::now());
        store.prepend(analysis.clone());
        info!(id = %analysis.id, total = store.len(), "Completed analysis");

        self.step = 0;
        self.show_history = true;
        Some(analysis)
    }

    /// Back to the first step. An unfinished draft is kept so its text is
    /// still there when stepping forward again.
    pub fn start_new(&mut self) {
        self.show_history = false;
        self.step = 0;
    }

    pub fn view_history(&mut self) {
        if !self.draft.is_empty() {
            debug!(step = self.step, "Keeping unfinished draft while history is shown");
        }
        self.show_history = true;
    }

    /// History is only offered from the wizard once something has been saved.
    pub fn can_view_history(&self, store: &AnalysisStore) -> bool {
        !store.is_empty()
    }

    pub fn progress_percent(&self) -> f32 {
        self.step as f32 / LAST_STEP as f32 * 100.0
    }

    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.step + 1, TOTAL_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::config::QuadrantId;
    use crate::file::MemoryStorage;

    fn session_at(step: usize) -> WizardSession {
        WizardSession {
            step,
            ..WizardSession::default()
        }
    }

    fn filled_draft() -> AnalysisDraft {
        let mut draft = AnalysisDraft::default();
        draft.update_field(DraftField::Challenge, "c");
        for id in QuadrantId::ALL {
            draft.update_field(DraftField::Quadrant(id), id.key());
        }
        draft.update_field(DraftField::Insights, "a");
        draft.update_field(DraftField::ActionPlan, "b");
        draft
    }

    #[test]
    fn advance_blocked_while_step_field_is_blank() {
        for step in 0..LAST_STEP {
            for blank in ["", "   ", "\n\t"] {
                let mut session = session_at(step);
                session.draft = filled_draft();
                let field = session.required_fields()[0];
                session.update_field(field, blank);

                assert!(!session.advance(), "step {step}");
                assert_eq!(session.step(), step);
            }
        }
    }

    #[test]
    fn advance_checks_only_the_displayed_quadrant() {
        let mut session = session_at(4);
        session.update_field(DraftField::Quadrant(QuadrantId::LowerRight), "market is tight");

        assert!(session.advance());
        assert_eq!(session.step(), 5);
    }

    #[test]
    fn advance_stops_at_last_step() {
        let mut session = session_at(LAST_STEP);
        session.draft = filled_draft();
        assert!(!session.advance());
        assert_eq!(session.step(), LAST_STEP);
    }

    #[test]
    fn retreat_decrements_by_one_and_stops_at_zero() {
        for step in 0..=LAST_STEP {
            let mut session = session_at(step);
            let moved = session.retreat();
            assert_eq!(moved, step > 0);
            assert_eq!(session.step(), step.saturating_sub(1));
        }
    }

    #[test]
    fn complete_prepends_and_resets() {
        let mut store = AnalysisStore::new("aqal-analyses");
        store.prepend(filled_draft().into_analysis(Utc::now()));

        let mut session = session_at(LAST_STEP);
        session.draft = filled_draft();
        session.update_field(DraftField::Insights, "a");
        session.update_field(DraftField::ActionPlan, "b");
        let quadrants = session.draft.quadrants.clone();

        let analysis = session.complete(&mut store).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.analyses()[0], analysis);
        assert_eq!(analysis.quadrants, quadrants);
        assert_eq!(analysis.insights, "a");
        assert_eq!(analysis.action_plan, "b");
        assert_eq!(session.step(), 0);
        assert!(session.draft.is_empty());
        assert!(session.show_history());
    }

    #[test]
    fn complete_with_blank_action_plan_leaves_store_unchanged() {
        let mut store = AnalysisStore::new("aqal-analyses");
        let mut session = session_at(LAST_STEP);
        session.draft = filled_draft();
        session.update_field(DraftField::ActionPlan, "  ");

        assert!(session.complete(&mut store).is_none());
        assert!(store.is_empty());
        assert_eq!(session.step(), LAST_STEP);
        assert!(!session.show_history());
    }

    #[test]
    fn complete_only_from_last_step() {
        let mut store = AnalysisStore::new("aqal-analyses");
        let mut session = session_at(3);
        session.draft = filled_draft();

        assert!(session.complete(&mut store).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn history_round_trip_keeps_draft_but_restarts_at_first_step() {
        let mut session = WizardSession::new();
        session.update_field(DraftField::Challenge, "Switch careers");
        assert!(session.advance());
        session.update_field(DraftField::Quadrant(QuadrantId::UpperLeft), "anxious");

        session.view_history();
        assert!(session.show_history());
        assert_eq!(session.step(), 1);

        session.start_new();
        assert!(!session.show_history());
        assert_eq!(session.step(), 0);
        assert_eq!(session.draft.challenge, "Switch careers");
        assert_eq!(session.draft.quadrants.upper_left, "anxious");
    }

    #[test]
    fn progress_tracks_step() {
        let mut session = WizardSession::new();
        assert_eq!(session.progress_percent(), 0.0);
        assert_eq!(session.step_label(), "Step 1 of 6");

        session.step = LAST_STEP;
        assert_eq!(session.progress_percent(), 100.0);
        assert_eq!(session.step_label(), "Step 6 of 6");

        session.step = 2;
        assert_eq!(session.progress_percent().round(), 40.0);
    }

    #[test]
    fn history_offered_once_store_has_records() {
        let session = WizardSession::new();
        let mut store = AnalysisStore::new("aqal-analyses");
        assert!(!session.can_view_history(&store));

        store.prepend(filled_draft().into_analysis(Utc::now()));
        assert!(session.can_view_history(&store));
    }

    #[test]
    fn career_change_walkthrough() {
        let mut storage = MemoryStorage::new();
        let mut store = AnalysisStore::load(&storage, "aqal-analyses");
        let mut session = WizardSession::new();
        assert!(store.is_empty());

        session.update_field(DraftField::Challenge, "Switch careers");
        assert!(session.advance());
        assert_eq!(session.step(), 1);

        let answers = [
            (QuadrantId::UpperLeft, "anxious"),
            (QuadrantId::UpperRight, "applied to 3 jobs"),
            (QuadrantId::LowerLeft, "partner supportive"),
            (QuadrantId::LowerRight, "market is tight"),
        ];
        for (expected_step, (id, text)) in (2..).zip(answers) {
            assert_eq!(session.current_quadrant().map(|t| t.id), Some(id));
            session.update_field(DraftField::Quadrant(id), text);
            assert!(session.advance());
            assert_eq!(session.step(), expected_step);
        }

        session.update_field(DraftField::Insights, "need more savings");
        session.update_field(DraftField::ActionPlan, "update resume today");
        assert!(session.complete(&mut store).is_some());
        store.persist(&mut storage).unwrap();

        let reloaded = AnalysisStore::load(&storage, "aqal-analyses");
        assert_eq!(reloaded.len(), 1);
        let saved = &reloaded.analyses()[0];
        assert_eq!(saved.challenge, "Switch careers");
        assert!(saved.completed);
        for (id, text) in answers {
            assert_eq!(saved.quadrants.get(id), text);
        }
        assert_eq!(saved.insights, "need more savings");
        assert_eq!(saved.action_plan, "update resume today");
        assert_eq!(session.step(), 0);
        assert!(session.show_history());
    }
}
