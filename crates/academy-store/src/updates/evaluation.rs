//! Attribute, evaluation, and evaluation detail updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::EvaluationStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub evaluator_user_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EvaluationStatus>,
}

pub struct EvaluationUpdateBuilder(EvaluationUpdate);

impl EvaluationUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(EvaluationUpdate::default())
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub fn evaluator_user_id(mut self, evaluator_user_id: Option<String>) -> Self {
        self.0.evaluator_user_id = Some(evaluator_user_id);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: EvaluationStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> EvaluationUpdate {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationDetailUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub comment: Option<Option<String>>,
}
