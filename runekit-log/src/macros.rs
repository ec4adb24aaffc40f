//! 分级日志宏
//!
//! 参数形式统一为 `(logger, 格式串, 参数...)`；未启用的级别不会格式化消息。

#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(level, ::std::module_path!(), ::std::format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Error, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use crate::{Level, LogRingBuffer, Logger};
    use std::cell::Cell;

    #[test]
    fn test_each_level_macro() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        trace!(logger, "t");
        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, "e");

        let levels: Vec<Level> = ring.dump_records().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error]
        );
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        struct Counted<'a>(&'a Cell<u32>);
        impl std::fmt::Display for Counted<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.set(self.0.get() + 1);
                f.write_str("x")
            }
        }

        let calls = Cell::new(0);
        let logger = Logger::new(Level::Warn);

        debug!(logger, "{}", Counted(&calls));
        assert_eq!(calls.get(), 0);
        warn!(logger, "{}", Counted(&calls));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_target_is_calling_module() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        let word = "foobar";
        debug!(logger, "matched {word:?}");

        let records = ring.dump_records();
        assert_eq!(records[0].target, module_path!());
        assert_eq!(records[0].message, "matched \"foobar\"");
    }
}
