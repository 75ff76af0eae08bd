/// Wire format for transaction timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only input format accepted for caller-supplied dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
