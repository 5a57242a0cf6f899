//! Adversarial feedback selection
//!
//! Partition the remaining candidates by the pattern each would produce
//! against the guess, then keep the family that is worst for the guesser.
//! The reported pattern is always truthful: every word in the kept family
//! really produces it.

use super::sort::{AdversarialOrder, Comparator, sort};
use super::WordFamily;
use crate::core::{FeedbackPattern, Word, colors_for};
use crate::error::EngineError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Group candidates into families by their pattern against `guess`
///
/// Families appear in the order their first member was seen, and members
/// keep their candidate order (duplicates included). Coloring runs on the
/// rayon pool; grouping is sequential.
#[must_use]
pub fn partition(candidates: &[Word], guess: &Word) -> Vec<WordFamily> {
    let patterns: Vec<FeedbackPattern> = candidates
        .par_iter()
        .map(|candidate| colors_for(candidate, guess))
        .collect();

    let mut index: FxHashMap<FeedbackPattern, usize> = FxHashMap::default();
    let mut families: Vec<WordFamily> = Vec::new();

    for (word, pattern) in candidates.iter().zip(patterns) {
        match index.entry(pattern) {
            Entry::Occupied(slot) => families[*slot.get()].push(word.clone()),
            Entry::Vacant(slot) => {
                slot.insert(families.len());
                families.push(WordFamily::seed(pattern, word.clone()));
            }
        }
    }

    families
}

/// All families for `guess`, worst for the guesser first
#[must_use]
pub fn rank_families(candidates: &[Word], guess: &Word) -> Vec<WordFamily> {
    sort(&partition(candidates, guess), &AdversarialOrder)
}

/// The family the adversary keeps for `guess`
///
/// # Errors
/// Returns `EngineError::EmptyCandidateSet` if `candidates` is empty.
pub fn select_family(candidates: &[Word], guess: &Word) -> Result<WordFamily, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }

    partition(candidates, guess)
        .into_iter()
        .min_by(WordFamily::adversarial_cmp)
        .ok_or(EngineError::EmptyCandidateSet)
}

/// Pick the feedback for `guess` and the candidates that remain
///
/// # Errors
/// Returns `EngineError::EmptyCandidateSet` if `candidates` is empty.
///
/// # Examples
/// ```
/// use evil_wordle::adversary::select_feedback;
/// use evil_wordle::core::{FeedbackColor::*, FeedbackPattern, Word};
///
/// let candidates: Vec<Word> = ["bread", "break", "bream"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("broad").unwrap();
///
/// let (pattern, remaining) = select_feedback(&candidates, &guess).unwrap();
/// assert_eq!(
///     pattern,
///     FeedbackPattern::new([Correct, Correct, NotInWord, Correct, NotInWord])
/// );
/// assert_eq!(remaining.len(), 2);
/// ```
pub fn select_feedback(
    candidates: &[Word],
    guess: &Word,
) -> Result<(FeedbackPattern, Vec<Word>), EngineError> {
    select_family(candidates, guess).map(WordFamily::into_parts)
}

/// How an opening guess fares against the adversary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerScore {
    pub guess: Word,
    pub pattern: FeedbackPattern,
    pub survivors: usize,
    pub difficulty: u32,
}

/// Fewest surviving candidates first, then alphabetical
#[derive(Debug, Clone, Copy, Default)]
pub struct FewestSurvivors;

impl Comparator<OpenerScore> for FewestSurvivors {
    fn less_than(&self, a: &OpenerScore, b: &OpenerScore) -> bool {
        (a.survivors, &a.guess) < (b.survivors, &b.guess)
    }
}

/// Score every guess as an opener against `candidates`
///
/// `on_progress` is called once per scored guess, from worker threads.
///
/// # Errors
/// Returns `EngineError::EmptyCandidateSet` if `candidates` is empty.
pub fn rank_openers<F>(
    guesses: &[Word],
    candidates: &[Word],
    on_progress: F,
) -> Result<Vec<OpenerScore>, EngineError>
where
    F: Fn() + Sync,
{
    let scores = guesses
        .par_iter()
        .map(|guess| -> Result<OpenerScore, EngineError> {
            let family = select_family(candidates, guess)?;
            on_progress();
            Ok(OpenerScore {
                guess: guess.clone(),
                pattern: *family.pattern(),
                survivors: family.len(),
                difficulty: family.difficulty(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sort(&scores, &FewestSurvivors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackColor::{Correct as C, NotInWord as N, WrongSpot as W};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<&str> {
        list.iter().map(Word::text).collect()
    }

    fn feedback(candidates: &[&str], guess: &str) -> (FeedbackPattern, Vec<Word>) {
        select_feedback(&words(candidates), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn picks_largest_family() {
        let (pattern, remaining) = feedback(&["bread", "break", "bream"], "broad");
        assert_eq!(pattern, FeedbackPattern::new([C, C, N, C, N]));
        assert_eq!(texts(&remaining), ["break", "bream"]);
    }

    #[test]
    fn equal_sizes_broken_by_difficulty() {
        let (pattern, remaining) = feedback(
            &["ample", "apple", "bread", "break", "bream", "stale"],
            "fable",
        );
        assert_eq!(pattern, FeedbackPattern::new([N, W, W, N, W]));
        assert_eq!(texts(&remaining), ["bread", "break", "bream"]);
    }

    #[test]
    fn larger_family_beats_equally_hard_ones() {
        let (pattern, remaining) = feedback(
            &[
                "alone", "clone", "dance", "dandy", "chard", "charm", "chasm", "store", "stove",
            ],
            "night",
        );
        assert_eq!(pattern, FeedbackPattern::new([W, N, N, N, N]));
        assert_eq!(texts(&remaining), ["alone", "clone", "dance", "dandy"]);
    }

    #[test]
    fn single_candidate_equal_to_guess() {
        let (pattern, remaining) = feedback(&["prana"], "prana");
        assert!(pattern.is_perfect());
        assert_eq!(texts(&remaining), ["prana"]);
    }

    #[test]
    fn single_candidate_gets_its_own_coloring() {
        let (pattern, remaining) = feedback(&["lever"], "light");
        assert_eq!(pattern, FeedbackPattern::new([C, N, N, N, N]));
        assert_eq!(texts(&remaining), ["lever"]);
    }

    #[test]
    fn difficulty_beats_correct_guess() {
        let (pattern, remaining) = feedback(&["grant", "prana"], "grant");
        assert_eq!(pattern, FeedbackPattern::new([N, C, C, C, N]));
        assert_eq!(texts(&remaining), ["prana"]);
    }

    #[test]
    fn difficulty_five_beats_two() {
        let (pattern, remaining) = feedback(&["grain", "grant", "prana", "train"], "drain");
        assert_eq!(pattern, FeedbackPattern::new([N, C, C, N, W]));
        assert_eq!(texts(&remaining), ["grant", "prana"]);
    }

    #[test]
    fn picks_family_of_five() {
        let (pattern, remaining) = feedback(
            &[
                "chain", "chair", "chant", "chard", "charm", "chasm", "drain", "grain", "grant",
                "hoard", "prana", "train",
            ],
            "chasm",
        );
        assert_eq!(pattern, FeedbackPattern::new([N, N, C, N, N]));
        assert_eq!(
            texts(&remaining),
            ["drain", "grain", "grant", "prana", "train"]
        );
    }

    #[test]
    fn size_first_at_equal_difficulty() {
        let (pattern, remaining) =
            feedback(&["shalt", "grain", "grant", "prana", "train"], "hoard");
        assert_eq!(pattern, FeedbackPattern::new([N, N, C, W, N]));
        assert_eq!(texts(&remaining), ["grain", "grant", "prana", "train"]);
    }

    #[test]
    fn pattern_breaks_remaining_tie() {
        let (pattern, remaining) = feedback(
            &[
                "brain", "broad", "dandy", "dawns", "heaps", "heard", "heart", "stone", "store",
                "stove",
            ],
            "fable",
        );
        assert_eq!(pattern, FeedbackPattern::new([N, W, N, N, W]));
        assert_eq!(texts(&remaining), ["heaps", "heard", "heart"]);
    }

    #[test]
    fn duplicates_count_toward_family_size() {
        let (pattern, remaining) = feedback(
            &[
                "alone", "ample", "ample", "angle", "angle", "apple", "apply", "dandy", "dawns",
                "eagle", "fable",
            ],
            "ample",
        );
        assert_eq!(pattern, FeedbackPattern::new([W, N, N, N, N]));
        assert_eq!(texts(&remaining), ["dandy", "dawns"]);
    }

    #[test]
    fn every_candidate_is_the_guess() {
        let (pattern, remaining) = feedback(&["apple", "apple", "apple"], "apple");
        assert!(pattern.is_perfect());
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn empty_candidates_rejected() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(
            select_feedback(&[], &guess),
            Err(EngineError::EmptyCandidateSet)
        );
    }

    #[test]
    fn partition_keeps_first_seen_order() {
        let candidates = words(&["stone", "bread", "store", "break", "stove"]);
        let families = partition(&candidates, &Word::new("fable").unwrap());

        assert_eq!(families.len(), 2);
        assert_eq!(texts(families[0].words()), ["stone", "store", "stove"]);
        assert_eq!(texts(families[1].words()), ["bread", "break"]);
        assert_eq!(
            families.iter().map(WordFamily::len).sum::<usize>(),
            candidates.len()
        );
    }

    #[test]
    fn rank_families_puts_selection_first() {
        let candidates = words(&["bread", "break", "bream"]);
        let guess = Word::new("broad").unwrap();
        let ranked = rank_families(&candidates, &guess);
        let selected = select_family(&candidates, &guess).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], selected);
        assert!(ranked[0].less_than(&ranked[1]));
    }

    #[test]
    fn rank_openers_orders_by_survivors() {
        let candidates = words(&["bread", "break", "bream", "grain", "train"]);
        let guesses = words(&["zzzzz", "break", "grain"]);
        let calls = AtomicUsize::new(0);

        let ranked = rank_openers(&guesses, &candidates, || {
            calls.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert_eq!(ranked.len(), 3);
        // ZZZZZ colors every candidate the same way
        assert_eq!(ranked.last().unwrap().guess.text(), "zzzzz");
        assert_eq!(ranked.last().unwrap().survivors, 5);
        assert!(ranked.windows(2).all(|w| w[0].survivors <= w[1].survivors));
    }

    #[test]
    fn rank_openers_rejects_empty_candidates() {
        let guesses = words(&["crane"]);
        assert_eq!(
            rank_openers(&guesses, &[], || {}),
            Err(EngineError::EmptyCandidateSet)
        );
    }
}
