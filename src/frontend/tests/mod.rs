//! Loader 单元测试

pub mod lexer;
