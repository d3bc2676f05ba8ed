/// Forwards to the `log` crate when the `logging` feature is enabled,
/// otherwise expands to nothing.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    };
}
