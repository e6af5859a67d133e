mod replay_output;
pub mod replay_ops;
mod replay_record;

pub use replay_output::ReplayOutput;
pub use replay_record::ReplayRecord;
