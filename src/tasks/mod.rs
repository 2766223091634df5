//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the client.
//!
//! # Tasks
//! - Cache reaper: removes expired cache entries once per TTL

mod reaper;

pub(crate) use reaper::spawn_reaper_task;
