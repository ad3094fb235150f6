//! Query result envelope - the phase projection views read
//!
//! A query's lifecycle lives in a [`DataResource`]; views never match on it
//! directly. They read an [`Envelope`], where exactly one of
//! `is_loading`/`is_error`/`is_success` holds and `data` is present only on
//! success. A query that has not been dispatched yet counts as loading.

use tui_dispatch::DataResource;

#[derive(Debug, PartialEq)]
pub struct Envelope<'a, T> {
    pub is_loading: bool,
    pub is_error: bool,
    pub is_success: bool,
    pub data: Option<&'a T>,
}

// Derived Clone/Copy would require T: Copy.
impl<T> Clone for Envelope<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Envelope<'_, T> {}

impl<'a, T> Envelope<'a, T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            is_error: false,
            is_success: false,
            data: None,
        }
    }

    pub fn error() -> Self {
        Self {
            is_loading: false,
            is_error: true,
            is_success: false,
            data: None,
        }
    }

    pub fn success(data: &'a T) -> Self {
        Self {
            is_loading: false,
            is_error: false,
            is_success: true,
            data: Some(data),
        }
    }

    pub fn from_resource(resource: &'a DataResource<T>) -> Self {
        if let Some(data) = resource.data() {
            Self::success(data)
        } else if resource.is_failed() {
            Self::error()
        } else {
            Self::loading()
        }
    }

    pub fn from_optional(resource: Option<&'a DataResource<T>>) -> Self {
        resource.map(Self::from_resource).unwrap_or_else(Self::loading)
    }

    pub fn phase(&self) -> Phase {
        if self.is_success {
            Phase::Success
        } else if self.is_error {
            Phase::Error
        } else {
            Phase::Loading
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Success,
}
