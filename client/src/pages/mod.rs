//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod calendar;
pub mod dashboard;
pub mod landing;
pub mod notes;
pub mod pipeline;
pub mod resume;
