//! Networking modules for the admin REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the host's `/api` proxy and `types`
//! defines the shared wire schema for both external collaborators (admin
//! backend and telnet monitor).

pub mod api;
pub mod types;
