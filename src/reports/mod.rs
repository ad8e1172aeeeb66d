//! Reports module for splitledger
//!
//! Read-only views derived from a store snapshot: per-group balances, the
//! category and group summary, and the activity feed.

pub mod activity;
pub mod balance;
pub mod summary;

pub use activity::{ActivityEntry, ActivityFeed};
pub use balance::{group_total, net_positions, BalanceStatus, GroupBalanceReport, MemberBalance};
pub use summary::{CategoryTotal, GroupTotal, SummaryReport};
