//! The adversary
//!
//! Word families, the comparator-driven sort used to rank them, and the
//! selection rule that keeps the family least helpful to the guesser.

mod family;
mod selector;
mod sort;

pub use family::WordFamily;
pub use selector::{
    FewestSurvivors, OpenerScore, partition, rank_families, rank_openers, select_family,
    select_feedback,
};
pub use sort::{AdversarialOrder, Comparator, NaturalOrder, sort, sort_natural};
