//! Detail presentation of a single schedule exception.
//!
//! The detail views hand back one event with its documentation history
//! already sorted newest first. Construction owns the sort, so a
//! details value never exposes history in storage order.

use serde::Serialize;

use crate::query::newest_first;
use crate::schedule::{EventHistory, MissedTreatment, TreatingElsewhere};

/// A missed treatment shaped for detail presentation.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct MissedTreatmentDetails {
    event: MissedTreatment,
}

impl MissedTreatmentDetails {
    pub fn new(mut event: MissedTreatment) -> Self {
        event.history = newest_first(std::mem::take(&mut event.history));
        Self { event }
    }

    pub fn event(&self) -> &MissedTreatment {
        &self.event
    }

    /// History rows, newest first.
    pub fn history(&self) -> &[EventHistory] {
        &self.event.history
    }
}

/// A treating-elsewhere stay shaped for detail presentation.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TreatingElsewhereDetails {
    event: TreatingElsewhere,
}

impl TreatingElsewhereDetails {
    pub fn new(mut event: TreatingElsewhere) -> Self {
        event.history = newest_first(std::mem::take(&mut event.history));
        Self { event }
    }

    pub fn event(&self) -> &TreatingElsewhere {
        &self.event
    }

    /// History rows, newest first.
    pub fn history(&self) -> &[EventHistory] {
        &self.event.history
    }
}
