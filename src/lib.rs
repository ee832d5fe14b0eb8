pub mod chart;
pub mod chunk;
pub mod error_handling;
pub mod grammar;
pub mod parser;
pub mod preprocess;
pub mod tree;
