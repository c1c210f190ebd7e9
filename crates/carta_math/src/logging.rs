//! Log categories and call-site macros used by carta_math.
//! 
//! When the `logging` feature is disabled, the macros expand to nothing.

cfg_if::cfg_if!{
    if #[cfg(feature = "logging")] {
        use carta_logging::LogCategory;

        pub(crate) const LOG_POOL_CAT    : LogCategory = LogCategory::new_with_sub("Math", "Pool");
        pub(crate) const LOG_PROJECT_CAT : LogCategory = LogCategory::new_with_sub("Math", "Project");
    }
}

macro_rules! math_warning {
    ($cat:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        carta_logging::log_warning!($crate::logging::$cat, $($arg)+);
    };
}
pub(crate) use math_warning;

macro_rules! math_verbose {
    ($cat:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        carta_logging::log_verbose!($crate::logging::$cat, $($arg)+);
    };
}
pub(crate) use math_verbose;

macro_rules! math_debug {
    ($cat:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        carta_logging::log_debug!($crate::logging::$cat, $($arg)+);
    };
}
pub(crate) use math_debug;
