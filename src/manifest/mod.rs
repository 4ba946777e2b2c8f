mod parser;

pub use parser::Manifest;
