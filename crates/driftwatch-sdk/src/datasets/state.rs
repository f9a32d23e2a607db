//! The metrics-cache state machine shared by both dataset handles.
//!
//! Every metric accessor runs the same three-way policy against the last
//! known job status, and every observed response flows through one
//! transition function, so status handling cannot diverge between
//! accessors:
//!
//! - `Error`: no metrics, ever. All cached slots are dropped.
//! - `Succeeded` + populated slot: cache hit, no network.
//! - `Importing`, or `Succeeded` with an empty slot: fetch and apply.

use crate::error::{DriftwatchError, Result};
use crate::models::{
    DataQuality, DatasetStats, Drift, JobStatus, ModelQuality, ModelType,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Job status plus one independent cache slot per metric kind.
///
/// The drift slot only ever fills for current datasets; reference handles
/// simply never touch it.
#[derive(Debug, Clone)]
pub(crate) struct MetricsState {
    pub status: JobStatus,
    pub statistics: Option<DatasetStats>,
    pub data_quality: Option<DataQuality>,
    pub model_quality: Option<ModelQuality>,
    pub drift: Option<Drift>,
}

impl MetricsState {
    pub fn new(status: JobStatus) -> Self {
        Self {
            status,
            statistics: None,
            data_quality: None,
            model_quality: None,
            drift: None,
        }
    }

    /// Drop every cached slot. A job that ended in error never yields
    /// metrics, even ones cached from an earlier transient read.
    pub fn invalidate(&mut self) {
        self.statistics = None;
        self.data_quality = None;
        self.model_quality = None;
        self.drift = None;
    }

    /// Apply one observed `(status, payload)` pair to a single slot.
    ///
    /// The most recently observed status wins for the whole handle, and an
    /// `Error` observation invalidates every slot, including ones filled
    /// by other accessors. Returns what the accessor should hand back.
    pub fn observe<T: Clone>(
        &mut self,
        observed: JobStatus,
        payload: Option<T>,
        slot: fn(&mut Self) -> &mut Option<T>,
    ) -> Option<T> {
        self.status = observed;
        if observed == JobStatus::Error {
            self.invalidate();
            return None;
        }
        *slot(self) = payload.clone();
        payload
    }

    /// Whether an accessor for `slot` must go to the network.
    pub fn needs_fetch<T>(&self, slot: &Option<T>) -> bool {
        self.status == JobStatus::Importing || slot.is_none()
    }
}

/// Parse a metric envelope: `{"jobStatus": ..., "<field>": <payload?>}`.
///
/// A missing or malformed `jobStatus`, or a payload `parse` rejects, is a
/// protocol failure quoting the raw body; nothing is applied to the state
/// in that case.
pub(crate) fn parse_envelope<T>(
    body: &str,
    field: &str,
    parse: impl FnOnce(Value) -> Result<T>,
) -> Result<(JobStatus, Option<T>)> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| DriftwatchError::unparsable(body))?;

    let status = value
        .get("jobStatus")
        .ok_or_else(|| DriftwatchError::unparsable(body))?;
    let status: JobStatus =
        serde_json::from_value(status.clone()).map_err(|_| DriftwatchError::unparsable(body))?;

    let payload = match value.get(field) {
        Some(raw) => Some(parse(raw.clone())?),
        None => None,
    };
    Ok((status, payload))
}

fn parse_payload<T: DeserializeOwned>(raw: Value, body: &str) -> Result<T> {
    serde_json::from_value(raw).map_err(|_| DriftwatchError::unparsable(body))
}

pub(crate) fn parse_statistics(body: &str) -> Result<(JobStatus, Option<DatasetStats>)> {
    parse_envelope(body, "statistics", |raw| parse_payload(raw, body))
}

/// Parse a data-quality envelope with the payload shape selected by the
/// handle's model kind.
pub(crate) fn parse_data_quality(
    body: &str,
    model_type: ModelType,
) -> Result<(JobStatus, Option<DataQuality>)> {
    parse_envelope(body, "dataQuality", |raw| match model_type {
        ModelType::Binary | ModelType::Multiclass => {
            parse_payload(raw, body).map(DataQuality::Classification)
        }
        ModelType::Regression => parse_payload(raw, body).map(DataQuality::Regression),
    })
}

/// Parse a model-quality envelope with the payload shape selected by the
/// handle's model kind.
pub(crate) fn parse_model_quality(
    body: &str,
    model_type: ModelType,
) -> Result<(JobStatus, Option<ModelQuality>)> {
    parse_envelope(body, "modelQuality", |raw| match model_type {
        ModelType::Binary => parse_payload(raw, body).map(ModelQuality::Binary),
        ModelType::Multiclass => parse_payload(raw, body).map(ModelQuality::Multiclass),
        ModelType::Regression => parse_payload(raw, body).map(ModelQuality::Regression),
    })
}

pub(crate) fn parse_drift(body: &str) -> Result<(JobStatus, Option<Drift>)> {
    parse_envelope(body, "drift", |raw| parse_payload(raw, body))
}
