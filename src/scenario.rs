use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::amortization::{monthly_payment, schedule_preview, ScheduleRow};
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::{LoanTerms, ScenarioId};

/// a recorded quote: loan terms plus the payment computed when it was stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    pub id: ScenarioId,
    pub terms: LoanTerms,
    pub monthly_payment: Money,
    pub created_at: DateTime<Utc>,
}

/// a scenario joined with a schedule preview recomputed on lookup, never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDetail {
    pub scenario: LoanScenario,
    pub schedule_preview: Vec<ScheduleRow>,
}

impl ScenarioDetail {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// in-memory collection of recorded scenarios
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScenarioStore {
    scenarios: Vec<LoanScenario>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    /// record a quote: range-check, price, stamp with a fresh id and the current time
    pub fn create(&mut self, terms: LoanTerms, time: &SafeTimeProvider) -> Result<LoanScenario> {
        terms.validate_limits()?;
        let payment = monthly_payment(&terms)?;

        let scenario = LoanScenario {
            id: Uuid::new_v4(),
            terms,
            monthly_payment: payment,
            created_at: time.now(),
        };
        self.scenarios.push(scenario.clone());
        Ok(scenario)
    }

    /// all recorded scenarios, newest first
    pub fn list(&self) -> Vec<&LoanScenario> {
        let mut scenarios: Vec<&LoanScenario> = self.scenarios.iter().collect();
        scenarios.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        scenarios
    }

    /// look up a scenario by id
    pub fn get(&self, id: ScenarioId) -> Result<&LoanScenario> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .ok_or(LoanError::ScenarioNotFound { id })
    }

    /// scenario joined with a recomputed preview over the given window
    pub fn detail(&self, id: ScenarioId, preview_months: u32) -> Result<ScenarioDetail> {
        let scenario = self.get(id)?;
        let preview = schedule_preview(&scenario.terms, preview_months)?;

        Ok(ScenarioDetail {
            scenario: scenario.clone(),
            schedule_preview: preview.rows,
        })
    }

    /// recorded scenarios in insertion order
    pub fn scenarios(&self) -> &[LoanScenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// checkpoint the whole store to json
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// restore a store from a checkpoint produced by to_json
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
