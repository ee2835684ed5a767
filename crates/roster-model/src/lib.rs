//! Data model for the roster dashboard.
//!
//! - [`Record`] / [`RecordId`] / [`RecordPatch`]: user entities and partial updates
//! - [`SortSpec`], [`GenderFilter`], [`PageSize`]: view settings shared by the
//!   store and front ends
//! - [`RecordDraft`]: create/edit form input with field validation

pub mod draft;
pub mod error;
pub mod record;
pub mod view;

pub use draft::{FieldError, FieldErrors, RecordDraft};
pub use error::{ModelError, Result};
pub use record::{Record, RecordId, RecordPatch};
pub use view::{GenderFilter, PageSize, SortDirection, SortKey, SortSpec};
