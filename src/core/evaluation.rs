//! Guess evaluation
//!
//! Compares a guess against the target and classifies every letter:
//! - Correct: same letter at the same position
//! - Present: letter occurs elsewhere in the target (duplicate-adjusted)
//! - Absent: letter not in the target, or all its occurrences already claimed
//!
//! Present letters also carry a positional hint: the 1-based position of the
//! letter's first occurrence in the target.

use super::{Letter, Word};

/// Feedback class for a single letter
///
/// Ordered by strength so that `max` picks the best-known status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFeedback {
    pub letter: Letter,
    pub status: LetterStatus,
    /// 1-based target position of the letter, only set for `Present`
    pub position_hint: Option<usize>,
}

/// Per-letter feedback for a whole guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    feedback: Vec<LetterFeedback>,
}

/// Evaluate `guess` against `target`
///
/// Shorthand for [`Evaluation::calculate`].
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Evaluation {
    Evaluation::calculate(target, guess)
}

impl Evaluation {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Both words must have the same length; callers validate this before
    /// evaluating.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter pool
    /// 2. Second pass, left to right: mark letters still in the pool as
    ///    present and remove them
    /// 3. Present letters get the first target position of that letter as hint,
    ///    even when a later occurrence was the one taken from the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, LetterStatus, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("snake").unwrap();
    /// let evaluation = Evaluation::calculate(&target, &guess);
    ///
    /// assert_eq!(evaluation.feedback()[1].status, LetterStatus::Present);
    /// assert_eq!(evaluation.feedback()[1].position_hint, Some(4));
    /// assert_eq!(evaluation.count_correct(), 2);
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(
            target.len(),
            guess.len(),
            "target and guess must have the same length"
        );

        let mut statuses = vec![LetterStatus::Absent; guess.len()];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                statuses[i] = LetterStatus::Correct;
                available[g.index()] -= 1;
            }
        }

        // Second pass: misplaced letters, consuming from what is left
        for (i, &g) in guess.letters().iter().enumerate() {
            if statuses[i] == LetterStatus::Absent && available[g.index()] > 0 {
                statuses[i] = LetterStatus::Present;
                available[g.index()] -= 1;
            }
        }

        let feedback = guess
            .letters()
            .iter()
            .zip(statuses)
            .map(|(&letter, status)| LetterFeedback {
                letter,
                status,
                position_hint: match status {
                    LetterStatus::Present => target.first_position_of(letter).map(|p| p + 1),
                    LetterStatus::Correct | LetterStatus::Absent => None,
                },
            })
            .collect();

        Self { feedback }
    }

    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[LetterFeedback] {
        &self.feedback
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterFeedback> {
        self.feedback.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.feedback.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty()
    }

    /// Statuses in guess order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.feedback.iter().map(|f| f.status).collect()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback
            .iter()
            .all(|f| f.status == LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.feedback.iter().filter(|f| f.status == status).count()
    }

    /// Convert to an emoji string like "⬛🟨🟩⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback
            .iter()
            .map(|f| match f.status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬛',
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.feedback.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn eval(target: &str, guess: &str) -> Evaluation {
        evaluate(&Word::new(target).unwrap(), &Word::new(guess).unwrap())
    }

    fn hints(evaluation: &Evaluation) -> Vec<Option<usize>> {
        evaluation.iter().map(|f| f.position_hint).collect()
    }

    #[test]
    fn exact_match_is_all_correct() {
        for word in ["crane", "slate", "zzzzz", "aaaaa", "level"] {
            let evaluation = eval(word, word);
            assert!(evaluation.is_win());
            assert_eq!(evaluation.count_correct(), 5);
            assert_eq!(evaluation.count_present(), 0);
            assert_eq!(hints(&evaluation), vec![None; 5]);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let evaluation = eval("abcde", "fghij");
        assert_eq!(evaluation.statuses(), vec![Absent; 5]);
        assert!(!evaluation.is_win());
    }

    #[test]
    fn crane_snake_example() {
        // S(absent) N(present, N is 4th in CRANE) A(correct) K(absent) E(correct)
        let evaluation = eval("crane", "snake");
        assert_eq!(
            evaluation.statuses(),
            vec![Absent, Present, Correct, Absent, Correct]
        );
        assert_eq!(hints(&evaluation), vec![None, Some(4), None, None, None]);
    }

    #[test]
    fn swapped_letters_are_present() {
        let evaluation = eval("abcde", "bacde");
        assert_eq!(
            evaluation.statuses(),
            vec![Present, Present, Correct, Correct, Correct]
        );
        assert_eq!(hints(&evaluation), vec![Some(2), Some(1), None, None, None]);
    }

    #[test]
    fn repeated_guess_letter_matches_target_count() {
        // ERASE against SPEED: both E's in the guess find one of SPEED's two E's
        let evaluation = eval("speed", "erase");
        assert_eq!(
            evaluation.statuses(),
            vec![Present, Absent, Absent, Present, Present]
        );
        assert_eq!(
            hints(&evaluation),
            vec![Some(3), None, None, Some(1), Some(3)]
        );
    }

    #[test]
    fn repeated_guess_letter_capped_by_target() {
        // ALLOW has two L's and one A: LLAMA gets L present, L correct,
        // first A present and the second A absent
        let evaluation = eval("allow", "llama");
        assert_eq!(
            evaluation.statuses(),
            vec![Present, Correct, Present, Absent, Absent]
        );
        assert_eq!(
            hints(&evaluation),
            vec![Some(2), None, Some(1), None, None]
        );
    }

    #[test]
    fn exact_matches_claim_before_misplaced() {
        // The correct O in position 3 must not be stolen by the earlier O
        let evaluation = eval("floor", "robot");
        assert_eq!(
            evaluation.statuses(),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn extra_copies_are_absent_once_pool_is_empty() {
        let evaluation = eval("crane", "eeeee");
        assert_eq!(
            evaluation.statuses(),
            vec![Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn hint_reports_first_occurrence_not_consumed_one() {
        // LEVEL: the L at position 1 is taken by the exact match, so the second
        // guess L consumes the L at position 5, but the hint still names 1.
        let evaluation = eval("level", "llama");
        assert_eq!(
            evaluation.statuses(),
            vec![Correct, Present, Absent, Absent, Absent]
        );
        assert_eq!(evaluation.feedback()[1].position_hint, Some(1));
    }

    #[test]
    fn works_for_other_lengths() {
        let evaluation = eval("ab", "ba");
        assert_eq!(evaluation.statuses(), vec![Present, Present]);
        assert_eq!(evaluation.len(), 2);
    }

    #[test]
    fn long_words_with_many_repeats() {
        let target = format!("{}{}", "A".repeat(256), "B".repeat(256));
        let guess = format!("{}{}", "B".repeat(256), "A".repeat(256));
        let evaluation = eval(&target, &guess);

        assert_eq!(evaluation.len(), 512);
        assert_eq!(evaluation.count_present(), 512);
        assert_eq!(evaluation.feedback()[0].position_hint, Some(257));
        assert_eq!(evaluation.feedback()[511].position_hint, Some(1));
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(eval("crane", "snake").to_emoji(), "⬛🟨🟩⬛🟩");
        assert_eq!(eval("crane", "crane").to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn status_ordering_prefers_stronger_feedback() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Some(Absent) > None);
    }
}
