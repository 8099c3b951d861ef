pub mod board;
pub mod resolve;
pub mod script;
