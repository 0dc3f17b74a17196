//! 编译模块：将特征库中的分隔符正则编译为可执行的匹配器
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledPattern, PatternSpec};
pub use self::compiler::PatternCompiler;
