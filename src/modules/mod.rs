pub mod codegen;
pub mod video;
