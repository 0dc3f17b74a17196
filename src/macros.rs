//! 日志宏：启用 `logging` 特性时转发到 tracing，否则为空操作

#[cfg(feature = "logging")]
pub(crate) use tracing::{debug, info, trace, warn};

#[cfg(not(feature = "logging"))]
mod noop {
    // 参数仍参与类型检查，避免关闭日志后出现未使用变量
    macro_rules! debug {
        ($($arg:tt)*) => {{ let _ = ::std::format_args!($($arg)*); }};
    }

    macro_rules! info {
        ($($arg:tt)*) => {{ let _ = ::std::format_args!($($arg)*); }};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{ let _ = ::std::format_args!($($arg)*); }};
    }

    macro_rules! warn {
        ($($arg:tt)*) => {{ let _ = ::std::format_args!($($arg)*); }};
    }

    #[allow(unused_imports)]
    pub(crate) use {debug, info, trace, warn};
}
#[cfg(not(feature = "logging"))]
#[allow(unused_imports)]
pub(crate) use noop::{debug, info, trace, warn};
