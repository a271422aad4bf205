pub mod audit;
pub mod encoders;
pub mod listener;
