// src/state/draft.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use crate::config::QuadrantId;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantResponses {
    pub upper_left: String,
    pub upper_right: String,
    pub lower_left: String,
    pub lower_right: String,
}

impl QuadrantResponses {
    pub fn get(&self, id: QuadrantId) -> &str {
        match id {
            QuadrantId::UpperLeft => &self.upper_left,
            QuadrantId::UpperRight => &self.upper_right,
            QuadrantId::LowerLeft => &self.lower_left,
            QuadrantId::LowerRight => &self.lower_right,
        }
    }

    pub fn get_mut(&mut self, id: QuadrantId) -> &mut String {
        match id {
            QuadrantId::UpperLeft => &mut self.upper_left,
            QuadrantId::UpperRight => &mut self.upper_right,
            QuadrantId::LowerLeft => &mut self.lower_left,
            QuadrantId::LowerRight => &mut self.lower_right,
        }
    }

    pub fn set(&mut self, id: QuadrantId, value: impl Into<String>) {
        *self.get_mut(id) = value.into();
    }
}

/// Field a wizard step writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Challenge,
    Quadrant(QuadrantId),
    Insights,
    ActionPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisDraft {
    pub challenge: String,
    pub quadrants: QuadrantResponses,
    pub insights: String,
    pub action_plan: String,
}

impl AnalysisDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Challenge => &self.challenge,
            DraftField::Quadrant(id) => self.quadrants.get(id),
            DraftField::Insights => &self.insights,
            DraftField::ActionPlan => &self.action_plan,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Challenge => &mut self.challenge,
            DraftField::Quadrant(id) => self.quadrants.get_mut(id),
            DraftField::Insights => &mut self.insights,
            DraftField::ActionPlan => &mut self.action_plan,
        }
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Quadrant(id) => self.quadrants.set(id, value),
            _ => *self.field_mut(field) = value.into(),
        }
    }

    pub fn is_filled(&self, field: DraftField) -> bool {
        !self.field(field).trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        *self == AnalysisDraft::default()
    }

    /// Moves the draft verbatim into a completed record stamped with `created_at`.
    pub fn into_analysis(self, created_at: DateTime<Utc>) -> Analysis {
        Analysis {
            id: Uuid::new_v4().to_string(),
            challenge: self.challenge,
            quadrants: self.quadrants,
            insights: self.insights,
            action_plan: self.action_plan,
            created_at,
            completed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub id: String,
    pub challenge: String,
    pub quadrants: QuadrantResponses,
    pub insights: String,
    pub action_plan: String,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}
