#![allow(non_snake_case)]
#![allow(unused_parens)]
#![allow(unused_doc_comments)]
#![allow(non_camel_case_types)]
pub mod access_control;
pub mod helpers;
pub mod loyalty_point;
pub mod math;
pub mod merkle;
pub mod types;
pub mod vesting;
