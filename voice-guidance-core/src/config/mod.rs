mod turns_sound_config;

pub use turns_sound_config::TurnsSoundConfig;
