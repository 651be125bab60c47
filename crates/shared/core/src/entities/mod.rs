mod layout;
mod trial;

pub use layout::GameLayout;
pub use trial::TrialResult;
