pub mod protocol;
pub mod timer;
