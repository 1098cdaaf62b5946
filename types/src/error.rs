pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Build an `anyhow::Error` from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::internal_anyhow_dont_use!($($arg)*)
    };
}
