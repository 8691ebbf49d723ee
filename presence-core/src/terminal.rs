//! The terminal type set.
//!
//! Terminal values are traversal leaves: presence alone counts, never
//! content. An empty string is still a present string. The set is fixed
//! for the process lifetime — it is the original allow-list (numeric,
//! boolean, text, date/time, unique identifier) expressed as trait
//! impls instead of a runtime class list.

use crate::error::Result;
use crate::inspect::Inspect;

macro_rules! impl_terminal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                fn deep_non_null(&self) -> Result<bool> {
                    Ok(true)
                }
            }
        )+
    };
}

impl_terminal!(u8, u16, u32, u64, u128, usize);
impl_terminal!(i8, i16, i32, i64, i128, isize);
impl_terminal!(f32, f64);
impl_terminal!(bool);
impl_terminal!(str, String);
impl_terminal!(uuid::Uuid);
impl_terminal!(
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
);

impl<Tz: chrono::TimeZone> Inspect for chrono::DateTime<Tz> {
    fn deep_non_null(&self) -> Result<bool> {
        Ok(true)
    }
}
