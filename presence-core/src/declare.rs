//! Explicit capability declaration for structured types.
//!
//! The original checker paired reflected fields with conventionally
//! named getters; here each type states its inspectable fields once, at
//! definition time. Fields left out of the declaration are invisible to
//! traversal. Types built by composition declare the embedded struct as
//! a single child and inherit its reachable set transitively.

/// Implement [`Inspect`](crate::Inspect) for a struct by enumerating its
/// inspectable fields.
///
/// ```
/// use presence_core::{deep_non_null, inspect_fields};
///
/// struct Contact {
///     phone: Option<String>,
///     // not declared below: never traversed
///     internal_rank: Option<u32>,
/// }
///
/// inspect_fields!(Contact { phone });
///
/// let contact = Contact { phone: None, internal_rank: Some(3) };
/// assert!(!deep_non_null(&contact).unwrap());
/// ```
///
/// An empty declaration (`inspect_fields!(Marker {})`) is allowed and
/// makes the type always answer false.
#[macro_export]
macro_rules! inspect_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Inspect for $ty {
            fn deep_non_null(&self) -> $crate::Result<bool> {
                $(
                    if $crate::Inspect::deep_non_null(&self.$field)? {
                        return Ok(true);
                    }
                )*
                Ok(false)
            }
        }
    };
}
