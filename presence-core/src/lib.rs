//! Deep presence checking for record graphs.
//!
//! `deep_non_null` answers one question: does a value, or anything
//! reachable from it, hold a present terminal value? Absent fields are
//! `Option::None`, terminal leaves are numbers/text/booleans/timestamps/
//! identifiers, containers contribute elements, and structured types
//! declare their inspectable fields with [`inspect_fields!`].

pub mod container;
pub mod declare;
pub mod error;
pub mod inspect;
pub mod shared;
pub mod terminal;

pub use error::{IntrospectError, Result};
pub use inspect::{Inspect, any_non_null, deep_non_null};
