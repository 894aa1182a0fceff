pub mod activity;
pub mod generation;
pub mod trip;
