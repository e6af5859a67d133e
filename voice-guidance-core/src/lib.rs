//! Core of spoken turn-by-turn guidance: decides when an upcoming maneuver should be
//! announced and composes the locale text for the announcement.
//!
//! The entry point is [`algorithm::turns_sound::TurnsSound`], a session object which is fed
//! the distance to the next maneuver on every position update.
pub mod algorithm;
pub mod config;
pub mod model;
