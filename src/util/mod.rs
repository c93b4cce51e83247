pub mod duration;
pub mod parse;
pub mod quote;
pub mod timestamp;
