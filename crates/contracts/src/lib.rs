//! Data contracts shared between the list engine and the dashboard screens

pub mod domain;
pub mod shared;
