pub mod guidance;
pub mod replay;
