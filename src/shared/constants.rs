/// Default number of reports returned by the community feed
pub const DEFAULT_FEED_LIMIT: i64 = 50;

/// Maximum number of reports a single feed request may ask for
pub const MAX_FEED_LIMIT: i64 = 100;

/// Points awarded to a user for each confirmation they make
pub const POINTS_PER_CONFIRMATION: i32 = 1;
