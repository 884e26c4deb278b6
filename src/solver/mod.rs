pub mod constraint;
pub mod engine;
pub mod family;
pub mod heuristics;
pub mod knowledge;
pub mod observer;
pub mod passes;
pub mod stats;
pub mod universe;
pub mod value;
