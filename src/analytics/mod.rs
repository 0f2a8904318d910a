//! Aggregate statistics over the breed knowledge base.

mod peers;
mod summary;

pub use peers::{PeerEntry, peer_comparison, peer_set_for};
pub use summary::{
    AnalyticsSnapshot, OriginCounts, TypeCounts, YieldRank, average_max_yield, count_by_origin,
    count_by_type, snapshot, top_by_yield,
};
