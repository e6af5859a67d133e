mod guidance_state;
mod shared_turns_sound;
mod turns_sound;
#[cfg(test)]
mod turns_sound_tests;

pub use guidance_state::GuidanceState;
pub use shared_turns_sound::SharedTurnsSound;
pub use turns_sound::TurnsSound;
