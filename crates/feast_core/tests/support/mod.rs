#![allow(dead_code)]

pub mod problems;
