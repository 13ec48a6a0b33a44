pub mod blocking;
pub mod timer;
