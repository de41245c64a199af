pub mod leaderboard;
pub mod platform;
pub mod redis;
pub mod stats;
pub mod user;

pub use platform::Platform;
pub use user::UserStats;
