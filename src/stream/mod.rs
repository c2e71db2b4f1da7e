// Async counterparts of the core operators, driven through explicit pull methods.
pub mod batch;
pub mod fold;
pub mod group;
pub mod seq;
pub mod zip;
