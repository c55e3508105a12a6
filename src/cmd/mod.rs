pub mod partition;
pub mod recommend;
