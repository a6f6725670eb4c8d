pub mod builder;
pub mod classify;
pub mod flatten;
pub mod heuristics;
pub mod model;
pub mod nodes;
