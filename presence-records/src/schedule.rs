//! Schedule-exception records.
//!
//! A schedule exception marks a day a patient did not receive treatment
//! at their home facility: either a missed treatment or a stay at
//! another facility ("treating elsewhere"). These are query-result
//! shapes — every field is optional — so each type declares its
//! inspectable fields for deep presence checking.

use chrono::NaiveDateTime;
use presence_core::inspect_fields;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coded reason attached to a schedule exception.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

inspect_fields!(ReasonCode { code_id, display_name });

/// One documentation track row in an event's history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_date_time: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documented_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

inspect_fields!(EventHistory {
    document_date_time,
    documented_by,
    status,
});

/// Fields common to every schedule exception. Concrete event types
/// embed this by composition and declare it as one inspectable child.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_exception_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_patient_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_number_documented_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
}

inspect_fields!(ScheduleEvent {
    schedule_exception_id,
    patient_id,
    master_patient_identifier,
    facility_number_documented_at,
    start_date,
    end_date,
});

/// A treatment the patient missed outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedTreatment {
    #[serde(flatten)]
    pub event: ScheduleEvent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonCode>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub history: Vec<EventHistory>,
}

inspect_fields!(MissedTreatment { event, reason, history });

/// A span during which the patient was treated at another facility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatingElsewhere {
    #[serde(flatten)]
    pub event: ScheduleEvent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_txt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub history: Vec<EventHistory>,
}

inspect_fields!(TreatingElsewhere {
    event,
    reason,
    reason_txt,
    location_name,
    history,
});
