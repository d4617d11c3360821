#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {}", $msg, why);
            }
        }
    };
}

// Logging wrappers that tag records with the calling module so the log file can be
// filtered per subsystem

#[macro_export]
macro_rules! glint_error {
    ($($arg:tt)+) => {
        $crate::log::error!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_info {
    ($($arg:tt)+) => {
        $crate::log::info!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!(target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_trace {
    ($($arg:tt)+) => {
        $crate::log::trace!(target: module_path!(), $($arg)+)
    };
}
