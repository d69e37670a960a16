//! Game session state machine
//!
//! A session owns the target word and everything the player has done so far.
//! It moves `InProgress -> Won` on an exact match or `InProgress -> Lost` when
//! the attempts run out, and never leaves a terminal state. Starting over
//! means building a new session.

use super::GameConfig;
use crate::core::{Evaluation, KeyboardState, Letter, Word, evaluate};
use crate::error::GameError;
use crate::wordlists::{WordSource, choose_target};
use rand::Rng;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Why an operation was refused
///
/// These are ordinary player-facing conditions, reported as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Submit with fewer letters than the word length
    Incomplete,
    /// Letter typed into a row that is already full
    RowFull,
    /// Delete on a row with no letters
    RowEmpty,
    /// Any input after the game has ended
    Finished,
}

/// Result of entering or deleting a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Rejected(Rejection),
}

/// Result of submitting the current row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guess recorded, the game goes on
    Continue,
    Won,
    Lost,
    Rejected(Rejection),
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// One line of the board, as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Submitted(&'a Attempt),
    /// The row being typed; may hold fewer letters than the word length
    Pending(&'a [Letter]),
    Empty,
}

#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    config: GameConfig,
    attempts: Vec<Attempt>,
    current_row: usize,
    pending: Vec<Letter>,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl Session {
    /// Start a game with a known target
    ///
    /// # Errors
    /// Returns `GameError::TargetLength` if the target does not match the
    /// configured word length.
    pub fn new(target: Word, config: GameConfig) -> Result<Self, GameError> {
        if target.len() != config.word_length() {
            return Err(GameError::TargetLength {
                expected: config.word_length(),
                actual: target.len(),
            });
        }

        tracing::debug!(word = %target, "new session");

        Ok(Self {
            target,
            config,
            attempts: Vec::with_capacity(config.max_attempts()),
            current_row: 0,
            pending: Vec::with_capacity(config.word_length()),
            keyboard: KeyboardState::new(),
            outcome: Outcome::InProgress,
        })
    }

    /// Start a game with a target chosen uniformly from a word source
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordSource` when the source has no words of the
    /// configured length, or any error raised by the source itself.
    pub fn from_source<S, R>(source: &S, config: GameConfig, rng: &mut R) -> Result<Self, GameError>
    where
        S: WordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let target = choose_target(source, config.word_length(), rng)?;
        Self::new(target, config)
    }

    /// Replace this session with a fresh one for `target`, keeping the config
    ///
    /// # Errors
    /// Same as [`Session::new`].
    pub fn reset(self, target: Word) -> Result<Self, GameError> {
        Self::new(target, self.config)
    }

    /// Type a letter into the next free cell of the current row
    pub fn enter_letter(&mut self, letter: Letter) -> EditOutcome {
        if self.is_terminal() {
            return EditOutcome::Rejected(Rejection::Finished);
        }
        if self.pending.len() == self.config.word_length() {
            return EditOutcome::Rejected(Rejection::RowFull);
        }

        self.pending.push(letter);
        tracing::trace!(%letter, column = self.pending.len(), "letter entered");
        EditOutcome::Applied
    }

    /// Clear the last filled cell of the current row
    pub fn delete_letter(&mut self) -> EditOutcome {
        if self.is_terminal() {
            return EditOutcome::Rejected(Rejection::Finished);
        }
        if self.pending.pop().is_none() {
            return EditOutcome::Rejected(Rejection::RowEmpty);
        }

        tracing::trace!(column = self.pending.len(), "letter deleted");
        EditOutcome::Applied
    }

    /// Evaluate the current row and advance the game
    pub fn submit_row(&mut self) -> SubmitOutcome {
        if self.is_terminal() {
            return SubmitOutcome::Rejected(Rejection::Finished);
        }
        if self.pending.len() != self.config.word_length() {
            return SubmitOutcome::Rejected(Rejection::Incomplete);
        }

        let guess = Word::from_letters(std::mem::take(&mut self.pending));
        let evaluation = evaluate(&self.target, &guess);
        self.keyboard.record(&evaluation);

        let won = evaluation.is_win();
        tracing::debug!(
            row = self.current_row,
            guess = %guess,
            feedback = %evaluation.to_emoji(),
            "row submitted"
        );
        self.attempts.push(Attempt { guess, evaluation });

        if won {
            self.outcome = Outcome::Won;
            tracing::info!(attempts = self.attempts.len(), "game won");
            return SubmitOutcome::Won;
        }

        self.current_row += 1;
        if self.current_row == self.config.max_attempts() {
            self.outcome = Outcome::Lost;
            tracing::info!(word = %self.target, "game lost");
            return SubmitOutcome::Lost;
        }

        SubmitOutcome::Continue
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Cursor within the row being typed, `0..=word_length`
    #[inline]
    #[must_use]
    pub fn current_column(&self) -> usize {
        self.pending.len()
    }

    /// Letters typed into the current row so far
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[Letter] {
        &self.pending
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Every board line, top to bottom, `max_attempts` in total
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.config.max_attempts()).map(move |i| {
            if let Some(attempt) = self.attempts.get(i) {
                Row::Submitted(attempt)
            } else if i == self.current_row && !self.is_terminal() {
                Row::Pending(&self.pending)
            } else {
                Row::Empty
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::SliceWords;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(target: &str) -> Session {
        Session::new(Word::new(target).unwrap(), GameConfig::default()).unwrap()
    }

    fn type_word(session: &mut Session, word: &str) {
        for c in word.chars() {
            session.enter_letter(Letter::from_char(c).unwrap());
        }
    }

    fn guess(session: &mut Session, word: &str) -> SubmitOutcome {
        type_word(session, word);
        session.submit_row()
    }

    #[test]
    fn new_session_is_in_progress() {
        let s = session("crane");
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_column(), 0);
        assert!(s.attempts().is_empty());
        assert_eq!(s.target().text(), "CRANE");
    }

    #[test]
    fn target_length_must_match_config() {
        let result = Session::new(Word::new("cranes").unwrap(), GameConfig::default());
        assert!(matches!(
            result,
            Err(GameError::TargetLength {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn entering_letters_advances_cursor_until_row_full() {
        let mut s = session("crane");
        type_word(&mut s, "abcde");
        assert_eq!(s.current_column(), 5);

        let extra = s.enter_letter(Letter::from_char('f').unwrap());
        assert_eq!(extra, EditOutcome::Rejected(Rejection::RowFull));
        assert_eq!(s.current_column(), 5);
        assert_eq!(s.pending().last(), Letter::from_char('e').as_ref());
    }

    #[test]
    fn delete_letter_moves_cursor_back() {
        let mut s = session("crane");
        type_word(&mut s, "ab");
        assert_eq!(s.delete_letter(), EditOutcome::Applied);
        assert_eq!(s.current_column(), 1);
        assert_eq!(s.delete_letter(), EditOutcome::Applied);
        assert_eq!(
            s.delete_letter(),
            EditOutcome::Rejected(Rejection::RowEmpty)
        );
        assert_eq!(s.current_column(), 0);
    }

    #[test]
    fn incomplete_submit_changes_nothing() {
        let mut s = session("crane");
        type_word(&mut s, "cra");
        let before = (s.current_row(), s.pending().to_vec(), s.keyboard().clone());

        assert_eq!(
            s.submit_row(),
            SubmitOutcome::Rejected(Rejection::Incomplete)
        );
        assert_eq!(
            (s.current_row(), s.pending().to_vec(), s.keyboard().clone()),
            before
        );
        assert!(s.attempts().is_empty());
    }

    #[test]
    fn wrong_guess_moves_to_next_row() {
        let mut s = session("crane");
        assert_eq!(guess(&mut s, "snake"), SubmitOutcome::Continue);
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.current_column(), 0);
        assert_eq!(s.attempts().len(), 1);
        assert_eq!(s.attempts()[0].guess.text(), "SNAKE");
    }

    #[test]
    fn crane_end_to_end() {
        let mut s = session("crane");
        assert_eq!(guess(&mut s, "snake"), SubmitOutcome::Continue);
        assert_eq!(
            s.attempts()[0].evaluation.statuses(),
            vec![
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Absent,
                LetterStatus::Correct,
            ]
        );

        assert_eq!(guess(&mut s, "crane"), SubmitOutcome::Won);
        assert_eq!(s.outcome(), Outcome::Won);
        assert!(s.is_terminal());
        assert_eq!(s.attempts().len(), 2);
        assert!(s.attempts()[1].evaluation.is_win());
    }

    #[test]
    fn six_misses_lose() {
        let mut s = session("crane");
        for _ in 0..5 {
            assert_eq!(guess(&mut s, "fight"), SubmitOutcome::Continue);
        }
        assert_eq!(guess(&mut s, "fight"), SubmitOutcome::Lost);
        assert_eq!(s.outcome(), Outcome::Lost);
        assert_eq!(s.current_row(), 6);
        assert_eq!(s.attempts().len(), 6);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut s = session("crane");
        for _ in 0..5 {
            guess(&mut s, "fight");
        }
        assert_eq!(guess(&mut s, "crane"), SubmitOutcome::Won);
        assert_eq!(s.outcome(), Outcome::Won);
    }

    #[test]
    fn terminal_session_ignores_input() {
        let mut s = session("crane");
        guess(&mut s, "crane");
        let snapshot = (s.current_row(), s.current_column(), s.attempts().len());

        assert_eq!(
            s.enter_letter(Letter::from_char('a').unwrap()),
            EditOutcome::Rejected(Rejection::Finished)
        );
        assert_eq!(
            s.delete_letter(),
            EditOutcome::Rejected(Rejection::Finished)
        );
        assert_eq!(
            s.submit_row(),
            SubmitOutcome::Rejected(Rejection::Finished)
        );
        assert_eq!(
            (s.current_row(), s.current_column(), s.attempts().len()),
            snapshot
        );
        assert_eq!(s.outcome(), Outcome::Won);
    }

    #[test]
    fn reset_starts_fresh_game() {
        let mut s = session("crane");
        guess(&mut s, "crane");

        let s = s.reset(Word::new("slate").unwrap()).unwrap();
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert_eq!(s.target().text(), "SLATE");
        assert!(s.attempts().is_empty());
        assert_eq!(s.keyboard(), &KeyboardState::new());
    }

    #[test]
    fn rows_describe_board() {
        let mut s = session("crane");
        guess(&mut s, "snake");
        type_word(&mut s, "cr");

        let rows: Vec<Row<'_>> = s.rows().collect();
        assert_eq!(rows.len(), 6);
        assert!(matches!(rows[0], Row::Submitted(a) if a.guess.text() == "SNAKE"));
        assert!(matches!(rows[1], Row::Pending(letters) if letters.len() == 2));
        assert!(rows[2..].iter().all(|r| *r == Row::Empty));
    }

    #[test]
    fn rows_have_no_pending_line_after_loss() {
        let mut s = Session::new(Word::new("ab").unwrap(), GameConfig::new(2, 1).unwrap()).unwrap();
        assert_eq!(guess(&mut s, "cd"), SubmitOutcome::Lost);
        let rows: Vec<Row<'_>> = s.rows().collect();
        assert_eq!(rows.len(), 1);
        assert!(matches!(rows[0], Row::Submitted(_)));
    }

    #[test]
    fn from_source_picks_a_candidate() {
        let source = SliceWords::new(&["crane", "slate", "toolong", "abc"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let s = Session::from_source(&source, GameConfig::default(), &mut rng).unwrap();
            assert!(["CRANE", "SLATE"].contains(&s.target().text()));
        }
    }

    #[test]
    fn from_source_without_matching_words_fails() {
        let source = SliceWords::new(&["abc", "toolong"]);
        let mut rng = StdRng::seed_from_u64(7);

        let result = Session::from_source(&source, GameConfig::default(), &mut rng);
        assert!(matches!(
            result,
            Err(GameError::EmptyWordSource { word_length: 5 })
        ));
    }
}
