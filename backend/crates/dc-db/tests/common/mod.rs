#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
pub use test_db::*;
