pub mod prefix;
pub mod term;
pub mod vocab;
