//! Schedule-exception record shapes and their read-side query helpers.

pub mod details;
pub mod query;
pub mod schedule;

pub use details::{MissedTreatmentDetails, TreatingElsewhereDetails};
pub use query::{documented, missed_treatments_on, newest_first, treating_elsewhere_covering};
pub use schedule::{
    EventHistory, MissedTreatment, ReasonCode, ScheduleEvent, TreatingElsewhere,
};
