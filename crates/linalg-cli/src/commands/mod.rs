pub mod construct;
pub mod demo;
pub mod dependency;
pub mod matrix;
pub mod slice;
pub mod vector;
