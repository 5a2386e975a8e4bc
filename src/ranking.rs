//! Relevance scoring and ordering of catalog items.
//!
//! A [`Ranker`] scores every candidate with a [`Scorer`], drops the ones at or
//! below the relevance threshold and orders the rest. The default
//! [`HeuristicScorer`] is an additive function of keyword matches, satisfied
//! constraints, price intent and small rating/price biases, with all
//! coefficients taken from [`RankingConfig`].

pub mod config;
pub mod ranker;
pub mod scorer;

pub use config::RankingConfig;
pub use ranker::{Ranker, Ranking, ScoredItem, compare_scored, price_positions, rank};
pub use scorer::{CATEGORY_HINTS, HeuristicScorer, ScoreBreakdown, Scorer};
