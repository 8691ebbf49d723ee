//! Smart pointers and interior-mutability wrappers.
//!
//! Owning pointers are transparent. Guarded cells are where a child
//! read can genuinely fail — a poisoned lock or an already mutably
//! borrowed `RefCell`. Such failures abort the entire check.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

use crate::error::{IntrospectError, Result};
use crate::inspect::Inspect;

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn deep_non_null(&self) -> Result<bool> {
        (**self).deep_non_null()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn deep_non_null(&self) -> Result<bool> {
        (**self).deep_non_null()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn deep_non_null(&self) -> Result<bool> {
        (**self).deep_non_null()
    }
}

impl<T: Inspect> Inspect for Mutex<T> {
    fn deep_non_null(&self) -> Result<bool> {
        let guard = self
            .lock()
            .map_err(|e| IntrospectError::failure("Mutex", e.to_string()))?;
        guard.deep_non_null()
    }
}

impl<T: Inspect> Inspect for RwLock<T> {
    fn deep_non_null(&self) -> Result<bool> {
        let guard = self
            .read()
            .map_err(|e| IntrospectError::failure("RwLock", e.to_string()))?;
        guard.deep_non_null()
    }
}

impl<T: Inspect> Inspect for RefCell<T> {
    fn deep_non_null(&self) -> Result<bool> {
        let borrow = self
            .try_borrow()
            .map_err(|e| IntrospectError::failure("RefCell", e.to_string()))?;
        borrow.deep_non_null()
    }
}
