//! Shared state structs provided as Leptos contexts from `App`.
//!
//! DESIGN
//! ======
//! One struct per fetched collection keeps page refetch logic independent:
//! a mutation on the users screen never disturbs board or message state.

pub mod boards;
pub mod messages;
pub mod stats;
pub mod telnet;
pub mod ui;
pub mod users;
