//! VM 模块测试


use crate::frontend::load;
use crate::vm::instructions::Program;

/// Load a program from text, panicking on malformed input
pub(crate) fn program(source: &str) -> Program {
    load(source).expect("test program must load")
}
