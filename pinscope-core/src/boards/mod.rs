//! Board pin tables
//!
//! Each board module exposes its static capability table, its
//! [`BoardLayout`](crate::BoardLayout) and a ready-made registry.

pub mod due;
