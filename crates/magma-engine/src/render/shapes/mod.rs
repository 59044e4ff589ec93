//! GPU shape pipelines.

mod common;

pub mod rect;

pub(crate) use common::linear_premul;
