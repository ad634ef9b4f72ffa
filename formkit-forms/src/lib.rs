//! Form session state machine and submitted-record store
//!
//! This crate layers the editing engine on top of `formkit-fields`: a
//! `FormSession` holds the selected schema and in-progress values, computes
//! completion progress, and commits validated records into a `RecordStore`
//! that supports in-place update and delete by index.
//!
//! Everything is synchronous and single-writer: each event from the front
//! end (select, edit, commit, delete) runs to completion before the next,
//! and progress always reflects the state right after the latest mutation.
//!
//! ## Basic Usage
//!
//! ```rust
//! use formkit_forms::FormsContext;
//!
//! # fn example() -> formkit_forms::Result<()> {
//! let mut ctx = FormsContext::with_builtin_schemas();
//!
//! ctx.select_form_type("userInfo");
//! ctx.set_field_value("firstName", "Ann")?;
//! ctx.set_field_value("lastName", "Lee")?;
//! let index = ctx.commit()?;
//!
//! assert_eq!(ctx.records()[index].get("firstName"), Some("Ann"));
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod session;
mod store;
mod types;

pub use context::FormsContext;
pub use error::{FormsError, Result};
pub use session::FormSession;
pub use store::RecordStore;
pub use types::Record;
