//! Standard exit codes (BSD sysexits.h compatible)

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;
