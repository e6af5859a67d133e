pub mod turns_sound;
