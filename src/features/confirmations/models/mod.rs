mod confirmation;
mod user_stats;

pub use confirmation::Confirmation;
pub use user_stats::UserStats;
