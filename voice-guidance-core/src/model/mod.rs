pub mod notification;
pub mod phrase;
pub mod turn;
pub mod unit;
mod turns_sound_error;

pub use turns_sound_error::TurnsSoundError;
