//! Horarium
//!
//! Horarium is a weekly operating-hours engine for storefronts: given a
//! schedule snapshot and a reference instant it decides whether the business
//! is open, how long until it closes, and, when closed, when and how it
//! opens next, including overnight slots that span midnight and the fixed
//! late-night window used for alternate messaging.

pub mod board;
pub mod fixtures;
pub mod locale;
pub mod messages;
pub mod next_opening;
pub mod notice;
pub mod schedule;
pub mod status;
pub mod store;
pub mod utils;
pub mod week;
