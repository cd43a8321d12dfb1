//! Shared client-side state modules.
//!
//! Only the session lives here; request state belongs to the hook instance
//! owned by each consuming page.

pub mod session;
