#![allow(dead_code)]

pub mod stat;
pub use stat::*;

pub mod generate;
pub use generate::*;

pub mod table;
pub use table::*;
