//! Log forwarding. Messages reach `defmt` when the feature is enabled and are
//! discarded otherwise, so call sites never need their own `cfg`.
#![macro_use]
#![allow(unused)]

#[collapse_debuginfo(yes)]
macro_rules! log_at {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::$level!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => { log_at!(trace, $($arg)*) };
}

#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => { log_at!(debug, $($arg)*) };
}

#[allow(unused_macros)]
macro_rules! info {
    ($($arg:tt)*) => { log_at!(info, $($arg)*) };
}

#[allow(unused_macros)]
macro_rules! warn {
    ($($arg:tt)*) => { log_at!(warn, $($arg)*) };
}

#[allow(unused_macros)]
macro_rules! error {
    ($($arg:tt)*) => { log_at!(error, $($arg)*) };
}
