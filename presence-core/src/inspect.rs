//! The deep non-null predicate.
//!
//! A value is "deeply non-null" when it, or anything reachable from it
//! through declared children, holds a present terminal value (a number,
//! text, boolean, timestamp, or identifier). Absence is modelled with
//! `Option`; containers contribute their elements (map values, never
//! keys); structured types contribute exactly the fields they declare
//! via [`inspect_fields!`](crate::inspect_fields).

use crate::error::Result;

/// Capability trait for deep presence checking.
///
/// Terminal types answer `Ok(true)` unconditionally. Aggregates answer
/// with a short-circuiting OR over their children and propagate any
/// child-read failure unchanged. Evaluation order of children must not
/// affect the result.
pub trait Inspect {
    /// Does this value, or anything reachable from it, hold a present
    /// terminal value?
    fn deep_non_null(&self) -> Result<bool>;
}

/// Entry point matching the original `isNonNullDeep` contract.
///
/// Traversal does not track visited nodes: a cyclic graph (reachable
/// only through shared-ownership shapes such as `Rc<RefCell<..>>`)
/// recurses until stack exhaustion. Callers must supply acyclic graphs.
pub fn deep_non_null<T: Inspect + ?Sized>(value: &T) -> Result<bool> {
    value.deep_non_null()
}

/// Short-circuiting OR over an iterator of inspectable children.
/// An empty iterator yields false.
pub fn any_non_null<'a, I, T>(children: I) -> Result<bool>
where
    I: IntoIterator<Item = &'a T>,
    T: Inspect + ?Sized + 'a,
{
    for child in children {
        if child.deep_non_null()? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `None` is the one directly expressible null: it is never non-null.
impl<T: Inspect> Inspect for Option<T> {
    fn deep_non_null(&self) -> Result<bool> {
        match self {
            Some(value) => value.deep_non_null(),
            None => Ok(false),
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn deep_non_null(&self) -> Result<bool> {
        (**self).deep_non_null()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn deep_non_null(&self) -> Result<bool> {
        (**self).deep_non_null()
    }
}
