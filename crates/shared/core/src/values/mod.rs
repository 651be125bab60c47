mod door;
mod label;
mod outcome;
mod strategy;

pub use door::Door;
pub use label::Label;
pub use outcome::Outcome;
pub use strategy::Strategy;
