// The correction session: an explicit depth-indexed traversal state machine
// over a dictionary trie, with bounded correction bookkeeping.

use nearkey_core::character::is_quote;
use nearkey_core::proximity::{CharProximity, ProximityModel};
use nearkey_core::MAX_WORD_LENGTH;

use crate::params::CorrectionParams;
use crate::ranking;
use crate::state::CorrectionFrame;
use crate::CorrectError;

/// Shortest word the engine will ever report as a candidate.
const MIN_SUGGEST_LENGTH: usize = 2;

/// Classification of one traversal step.
///
/// `TraverseAll` means the typed input is exhausted and the node merely
/// extends a completion; `Matched` means the node character was reconciled
/// with the typed input, possibly through a correction; `Unrelated` means the
/// branch cannot match and must be abandoned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Matched { terminal: bool },
    TraverseAll { terminal: bool },
    Unrelated,
}

impl StepOutcome {
    /// Whether the step landed on a word-ending node.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StepOutcome::Matched { terminal: true } | StepOutcome::TraverseAll { terminal: true }
        )
    }

    pub fn is_unrelated(self) -> bool {
        matches!(self, StepOutcome::Unrelated)
    }
}

/// The traversal engine for one correction query at a time.
///
/// Construction allocates the fixed-capacity buffers (typed-input copy,
/// assembled-word buffer, frame stack) once; `init_correction` and
/// `init_correction_state` reset them per query without reallocating. The
/// external caller owns the trie walk: it descends with `go_down_tree`,
/// restores a depth with `init_process_state` before trying each sibling,
/// classifies nodes with `process_char_and_calc_state`, and reads scores
/// through `final_freq` / `freq_for_split_two_words`.
///
/// The keyboard proximity model is lent per classify call and never stored,
/// so a long-lived session pairs freely with per-keystroke models.
#[derive(Debug)]
pub struct Correction {
    typed_letter_multiplier: i32,
    full_word_multiplier: i32,

    // Session parameters, set once per query.
    input: Vec<char>,
    input_length: usize,
    max_word_length: usize,
    max_edit_distance: i32,
    params: CorrectionParams,

    // Traversal cursors.
    matched_char_count: usize,
    input_index: usize,
    output_index: usize,
    terminal_consumed: usize,
    terminal_word_len: usize,
    diffs: i32,
    traverse_all: bool,
    pending_transposition: bool,
    skipped_output_index: Option<usize>,

    word: Vec<char>,
    frames: Vec<CorrectionFrame>,
}

impl Correction {
    /// Create an engine with the two ranking multipliers, which are fixed
    /// for its lifetime.
    pub fn new(typed_letter_multiplier: i32, full_word_multiplier: i32) -> Self {
        Self {
            typed_letter_multiplier,
            full_word_multiplier,
            input: Vec::with_capacity(MAX_WORD_LENGTH),
            input_length: 0,
            max_word_length: 0,
            max_edit_distance: 0,
            params: CorrectionParams::default(),
            matched_char_count: 0,
            input_index: 0,
            output_index: 0,
            terminal_consumed: 0,
            terminal_word_len: 0,
            diffs: 0,
            traverse_all: false,
            pending_transposition: false,
            skipped_output_index: None,
            word: vec!['\0'; MAX_WORD_LENGTH],
            frames: vec![CorrectionFrame::default(); MAX_WORD_LENGTH],
        }
    }

    /// Bind the typed input for the coming queries and set the depth bound.
    ///
    /// The input is copied into the session's fixed buffer. The maximum edit
    /// distance derives from the input length: 2 for short inputs, half the
    /// length otherwise. Resets the correction parameters to exact matching.
    pub fn init_correction(
        &mut self,
        input: &[char],
        max_word_length: usize,
    ) -> Result<(), CorrectError> {
        if max_word_length > MAX_WORD_LENGTH {
            return Err(CorrectError::CapacityExceeded {
                max: max_word_length,
                cap: MAX_WORD_LENGTH,
            });
        }
        if input.len() > max_word_length {
            return Err(CorrectError::InputTooLong {
                len: input.len(),
                max: max_word_length,
            });
        }
        self.input.clear();
        self.input.extend_from_slice(input);
        self.input_length = input.len();
        self.max_word_length = max_word_length;
        self.max_edit_distance = if input.len() < 5 { 2 } else { (input.len() / 2) as i32 };
        self.params = CorrectionParams::default();
        Ok(())
    }

    /// Declare which corrections the upcoming query may apply, and where.
    pub fn set_correction_params(&mut self, params: CorrectionParams) -> Result<(), CorrectError> {
        params.validate(self.input_length)?;
        self.params = params;
        Ok(())
    }

    /// Reset all cursors and seed the root frame for a new query.
    ///
    /// `root_pos` and `child_count` describe the root's child range in the
    /// trie's opaque addressing; `traverse_all` starts the whole query in
    /// completion mode (also forced when the typed input is empty).
    pub fn init_correction_state(&mut self, root_pos: u32, child_count: u32, traverse_all: bool) {
        let traverse_all = traverse_all || self.input_length == 0;
        self.matched_char_count = 0;
        self.input_index = 0;
        self.output_index = 0;
        self.terminal_consumed = 0;
        self.terminal_word_len = 0;
        self.diffs = 0;
        self.traverse_all = traverse_all;
        self.pending_transposition = false;
        self.skipped_output_index = None;
        self.frames[0] = CorrectionFrame {
            parent_index: None,
            sibling_pos: root_pos,
            child_count,
            input_index: 0,
            matched_char_count: 0,
            diffs: 0,
            traverse_all,
            pending_transposition: false,
            skipped_output_index: None,
        };
    }

    /// Restore the cursors for frame `index` and consume one of its child
    /// slots. Returns `false` once the frame's children are exhausted, which
    /// tells the caller to backtrack to `tree_parent_index(index)`.
    pub fn init_process_state(&mut self, index: usize) -> bool {
        let frame = self.frames[index];
        if frame.child_count == 0 {
            return false;
        }
        self.frames[index].child_count -= 1;
        self.output_index = index;
        self.input_index = frame.input_index;
        self.matched_char_count = frame.matched_char_count;
        self.diffs = frame.diffs;
        self.traverse_all = frame.traverse_all;
        self.pending_transposition = frame.pending_transposition;
        self.skipped_output_index = frame.skipped_output_index;
        true
    }

    /// Push a frame for the children of the node just processed and return
    /// its index, the new depth. The caller must not descend past the depth
    /// bound; doing so is a programming error and aborts.
    pub fn go_down_tree(&mut self, parent_index: usize, child_count: u32, first_child_pos: u32) -> usize {
        let index = self.output_index;
        assert!(
            index < self.frames.len(),
            "traversal descended past the maximum word length"
        );
        self.frames[index] = CorrectionFrame {
            parent_index: Some(parent_index),
            sibling_pos: first_child_pos,
            child_count,
            input_index: self.input_index,
            matched_char_count: self.matched_char_count,
            diffs: self.diffs,
            traverse_all: self.traverse_all,
            pending_transposition: self.pending_transposition,
            skipped_output_index: self.skipped_output_index,
        };
        index
    }

    /// The sibling resume cursor recorded at `index`.
    pub fn tree_sibling_pos(&self, index: usize) -> u32 {
        self.frames[index].sibling_pos
    }

    pub fn set_tree_sibling_pos(&mut self, index: usize, pos: u32) {
        self.frames[index].sibling_pos = pos;
    }

    /// The parent depth of frame `index`, `None` at the root.
    pub fn tree_parent_index(&self, index: usize) -> Option<usize> {
        self.frames[index].parent_index
    }

    /// Classify the node character `c` against the current traversal state.
    ///
    /// This is the central decision step: it consumes typed input, applies at
    /// most one positional correction, extends the assembled word, and
    /// engages traverse-all mode once the input is exhausted.
    pub fn process_char_and_calc_state(
        &mut self,
        model: &dyn ProximityModel,
        c: char,
        is_terminal: bool,
    ) -> StepOutcome {
        // Completion mode, and quotes inside dictionary words ("don't"):
        // emit the character without consuming typed input.
        if self.traverse_all || is_quote(c) {
            let in_traverse_all = self.traverse_all;
            self.push_word_char(c);
            if in_traverse_all {
                if is_terminal {
                    self.record_terminal();
                }
                return StepOutcome::TraverseAll { terminal: is_terminal };
            }
            return StepOutcome::Matched { terminal: false };
        }

        if self.pending_transposition {
            // Second half of a swap: the node char must match the typed
            // character before the swap point. The pair costs one diff,
            // charged on the first half.
            self.pending_transposition = false;
            if !model.classify(self.input[self.input_index - 1], c).is_match() {
                return StepOutcome::Unrelated;
            }
            self.input_index += 1;
            self.push_word_char(c);
        } else {
            match model.classify(self.input[self.input_index], c) {
                CharProximity::Exact => {
                    self.matched_char_count += 1;
                    self.input_index += 1;
                    self.push_word_char(c);
                }
                CharProximity::Near => {
                    self.matched_char_count += 1;
                    self.diffs += 1;
                    self.input_index += 1;
                    self.push_word_char(c);
                }
                CharProximity::Unrelated => {
                    if !self.process_corrected_char(model, c) {
                        return StepOutcome::Unrelated;
                    }
                }
            }
        }

        if self.input_index >= self.effective_input_length() {
            self.traverse_all = true;
            self.record_terminal();
        } else if is_terminal {
            self.record_terminal();
        }
        StepOutcome::Matched { terminal: is_terminal }
    }

    /// Try the positional corrections after a failed proximity match.
    /// Returns `false` when none applies, i.e. the branch is unrelated.
    fn process_corrected_char(&mut self, model: &dyn ProximityModel, c: char) -> bool {
        let index = self.input_index;

        if self.params.excessive_pos == Some(index) && index + 1 < self.input_length {
            // The typed char here is spurious: step over it and the node
            // char must match the following one.
            if !model.classify(self.input[index + 1], c).is_match() {
                return false;
            }
            self.diffs += 1;
            self.input_index += 2;
            self.push_word_char(c);
            return true;
        }

        if self.params.transposed_pos == Some(index) && index + 1 < self.input_length {
            // First half of a swap: the node char must match the *next*
            // typed character.
            if !model.classify(self.input[index + 1], c).is_match() {
                return false;
            }
            self.diffs += 1;
            self.pending_transposition = true;
            self.input_index += 1;
            self.push_word_char(c);
            return true;
        }

        if self.params.skip_pos == Some(index) && self.skipped_output_index.is_none() {
            // The typing missed this dictionary character: emit it without
            // consuming input. The input cursor stays put, so the recorded
            // output index doubles as the once-per-traversal guard.
            self.diffs += 1;
            self.skipped_output_index = Some(self.output_index);
            self.push_word_char(c);
            return true;
        }

        if self.params.space_proximity_pos == Some(index) && index + 1 < self.input_length {
            // A stray press next to the space bar: step over it.
            if !model.classify(self.input[index + 1], c).is_match() {
                return false;
            }
            self.diffs += 1;
            self.input_index += 2;
            self.push_word_char(c);
            return true;
        }

        false
    }

    /// Pruning advice: true once the accumulated diffs exceed the edit
    /// budget or the assembled word has reached the depth bound. Advisory --
    /// the caller may keep walking, but no in-budget candidate lies further
    /// down this branch.
    pub fn needs_to_prune(&self) -> bool {
        self.diffs > self.max_edit_distance || self.output_index >= self.max_word_length
    }

    /// Score the candidate whose terminal node was just reached.
    ///
    /// Returns `None` when the branch is not actually a usable candidate:
    /// the typed input was not fully consumed, the word is shorter than the
    /// minimum suggestion length, the edit budget is blown, or the word is
    /// exactly what was typed.
    pub fn final_freq(&self, raw_freq: i32) -> Option<i32> {
        if self.terminal_word_len < MIN_SUGGEST_LENGTH {
            return None;
        }
        if self.diffs > self.max_edit_distance {
            return None;
        }
        if self.terminal_consumed < self.effective_input_length() {
            return None;
        }
        if self.same_as_typed() {
            return None;
        }
        let same_length = self.terminal_word_len == self.effective_input_length();
        Some(ranking::calculate_final_freq(
            self.terminal_consumed,
            self.terminal_word_len,
            self.matched_char_count,
            raw_freq,
            same_length,
            self,
        ))
    }

    /// Score a candidate formed by splitting the input into two dictionary
    /// words at the configured missing-space or space-proximity position.
    pub fn freq_for_split_two_words(&self, first_freq: i32, second_freq: i32) -> Option<i32> {
        ranking::calc_freq_for_split_two_words(first_freq, second_freq, self)
    }

    /// The assembled word of the last terminal reached.
    pub fn terminal_word(&self) -> &[char] {
        &self.word[..self.terminal_word_len]
    }

    // -- Read-only projections of session state ----------------------------

    pub fn diffs(&self) -> i32 {
        self.diffs
    }

    pub fn input_index(&self) -> usize {
        self.input_index
    }

    pub fn output_index(&self) -> usize {
        self.output_index
    }

    pub fn matched_char_count(&self) -> usize {
        self.matched_char_count
    }

    pub fn needs_to_traverse_all(&self) -> bool {
        self.traverse_all
    }

    pub fn params(&self) -> &CorrectionParams {
        &self.params
    }

    pub fn skip_pos(&self) -> Option<usize> {
        self.params.skip_pos
    }

    pub fn excessive_pos(&self) -> Option<usize> {
        self.params.excessive_pos
    }

    pub fn transposed_pos(&self) -> Option<usize> {
        self.params.transposed_pos
    }

    pub fn space_proximity_pos(&self) -> Option<usize> {
        self.params.space_proximity_pos
    }

    pub fn missing_space_pos(&self) -> Option<usize> {
        self.params.missing_space_pos
    }

    pub(crate) fn typed_letter_multiplier(&self) -> i32 {
        self.typed_letter_multiplier
    }

    pub(crate) fn full_word_multiplier(&self) -> i32 {
        self.full_word_multiplier
    }

    pub(crate) fn skipped_output_index(&self) -> Option<usize> {
        self.skipped_output_index
    }

    // -- Internals ----------------------------------------------------------

    fn push_word_char(&mut self, c: char) {
        self.word[self.output_index] = c;
        self.output_index += 1;
    }

    fn record_terminal(&mut self) {
        self.terminal_consumed = self.input_index;
        self.terminal_word_len = self.output_index;
    }

    /// Input length the query must consume. A spurious character at the very
    /// end of the input can never be stepped over by a match, so it is
    /// excluded here instead.
    fn effective_input_length(&self) -> usize {
        match self.params.excessive_pos {
            Some(pos) if self.input_length > 0 && pos == self.input_length - 1 => {
                self.input_length - 1
            }
            _ => self.input_length,
        }
    }

    fn same_as_typed(&self) -> bool {
        self.terminal_word_len == self.input_length
            && self.word[..self.terminal_word_len] == self.input[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearkey_core::KeyboardLayout;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Feed a whole dictionary path through the engine the way the driver
    /// would, descending after every step. Returns the outcome of each step.
    fn walk_path(correction: &mut Correction, layout: &KeyboardLayout, path: &str) -> Vec<StepOutcome> {
        correction.init_correction_state(0, 1, false);
        let path: Vec<char> = path.chars().collect();
        let mut outcomes = Vec::new();
        let mut depth = 0;
        for (i, &c) in path.iter().enumerate() {
            assert!(correction.init_process_state(depth));
            let is_terminal = i + 1 == path.len();
            let outcome = correction.process_char_and_calc_state(layout, c, is_terminal);
            outcomes.push(outcome);
            if outcome.is_unrelated() {
                break;
            }
            depth = correction.go_down_tree(depth, 1, 0);
        }
        outcomes
    }

    fn engine_for(input: &str) -> Correction {
        let mut correction = Correction::new(2, 2);
        correction.init_correction(&chars(input), MAX_WORD_LENGTH).unwrap();
        correction
    }

    #[test]
    fn exact_path_matches_with_no_diffs() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("the");
        let outcomes = walk_path(&mut correction, &layout, "the");
        assert_eq!(
            outcomes,
            vec![
                StepOutcome::Matched { terminal: false },
                StepOutcome::Matched { terminal: false },
                StepOutcome::Matched { terminal: true },
            ]
        );
        assert_eq!(correction.diffs(), 0);
        assert_eq!(correction.matched_char_count(), 3);
        assert!(correction.needs_to_traverse_all());
    }

    #[test]
    fn near_key_match_costs_one_diff() {
        let layout = KeyboardLayout::qwerty();
        // 'r' is adjacent to 't' on qwerty.
        let mut correction = engine_for("rhe");
        let outcomes = walk_path(&mut correction, &layout, "the");
        assert!(!outcomes.iter().any(|o| o.is_unrelated()));
        assert_eq!(correction.diffs(), 1);
        assert_eq!(correction.matched_char_count(), 3);
    }

    #[test]
    fn unrelated_char_fails_the_branch() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("xhe");
        let outcomes = walk_path(&mut correction, &layout, "the");
        assert_eq!(outcomes, vec![StepOutcome::Unrelated]);
    }

    #[test]
    fn transposition_costs_one_diff() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("hte");
        correction.set_correction_params(CorrectionParams::transposed(0)).unwrap();
        let outcomes = walk_path(&mut correction, &layout, "the");
        assert!(!outcomes.iter().any(|o| o.is_unrelated()), "{outcomes:?}");
        assert_eq!(correction.diffs(), 1);
        assert_eq!(correction.terminal_word(), &chars("the")[..]);
    }

    #[test]
    fn transposition_without_params_is_unrelated() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("hte");
        let outcomes = walk_path(&mut correction, &layout, "the");
        // 'h' vs 't' is not adjacent on qwerty, so the first step fails.
        assert_eq!(outcomes, vec![StepOutcome::Unrelated]);
    }

    #[test]
    fn transposition_does_not_double_consume() {
        let layout = KeyboardLayout::qwerty();
        // "ab" with a swap at 0 must not match dictionary "bb": the second
        // step has to reconcile the 'a' that the first half stepped over.
        let mut correction = engine_for("ab");
        correction.set_correction_params(CorrectionParams::transposed(0)).unwrap();
        let outcomes = walk_path(&mut correction, &layout, "bb");
        assert!(outcomes.last().unwrap().is_unrelated(), "{outcomes:?}");
    }

    #[test]
    fn skipped_letter_advances_output_only() {
        let layout = KeyboardLayout::qwerty();
        // Typed "wrld", dictionary "world": the 'o' was never typed.
        let mut correction = engine_for("wrld");
        correction.set_correction_params(CorrectionParams::skip(1)).unwrap();
        let outcomes = walk_path(&mut correction, &layout, "world");
        assert!(!outcomes.iter().any(|o| o.is_unrelated()), "{outcomes:?}");
        assert_eq!(correction.diffs(), 1);
        assert_eq!(correction.terminal_word(), &chars("world")[..]);
    }

    #[test]
    fn skip_applies_at_most_once_per_traversal() {
        let layout = KeyboardLayout::qwerty();
        // Two letters missing at the same position: the second mismatch must
        // fail instead of skipping again.
        let mut correction = engine_for("am");
        correction.set_correction_params(CorrectionParams::skip(1)).unwrap();
        let outcomes = walk_path(&mut correction, &layout, "aqqm");
        assert!(outcomes.last().unwrap().is_unrelated(), "{outcomes:?}");
    }

    #[test]
    fn excessive_letter_advances_input_only() {
        let layout = KeyboardLayout::qwerty();
        // Typed "worrld", dictionary "world": one 'r' too many.
        let mut correction = engine_for("worrld");
        correction.set_correction_params(CorrectionParams::excessive(3)).unwrap();
        let outcomes = walk_path(&mut correction, &layout, "world");
        assert!(!outcomes.iter().any(|o| o.is_unrelated()), "{outcomes:?}");
        assert_eq!(correction.diffs(), 1);
    }

    #[test]
    fn trailing_excessive_letter_is_never_consumed() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("worldx");
        correction.set_correction_params(CorrectionParams::excessive(5)).unwrap();
        let outcomes = walk_path(&mut correction, &layout, "world");
        assert!(!outcomes.iter().any(|o| o.is_unrelated()), "{outcomes:?}");
        // The word ends right at the effective input length.
        assert!(correction.final_freq(100).is_some());
    }

    #[test]
    fn traverse_all_engages_once_input_is_exhausted() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("wo");
        let outcomes = walk_path(&mut correction, &layout, "word");
        assert_eq!(
            outcomes,
            vec![
                StepOutcome::Matched { terminal: false },
                StepOutcome::Matched { terminal: false },
                StepOutcome::TraverseAll { terminal: false },
                StepOutcome::TraverseAll { terminal: true },
            ]
        );
        assert_eq!(correction.terminal_word(), &chars("word")[..]);
    }

    #[test]
    fn quote_in_dictionary_consumes_no_input() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("dont");
        let outcomes = walk_path(&mut correction, &layout, "don't");
        assert!(!outcomes.iter().any(|o| o.is_unrelated()), "{outcomes:?}");
        assert_eq!(correction.diffs(), 0);
        assert_eq!(correction.terminal_word(), &chars("don't")[..]);
    }

    #[test]
    fn backtracking_restores_cursors() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("ab");
        correction.init_correction_state(0, 2, false);
        // First sibling consumes input and goes deep.
        assert!(correction.init_process_state(0));
        correction.process_char_and_calc_state(&layout, 'a', false);
        assert_eq!(correction.input_index(), 1);
        correction.go_down_tree(0, 1, 10);
        assert!(correction.init_process_state(1));
        correction.process_char_and_calc_state(&layout, 'b', true);
        assert_eq!(correction.input_index(), 2);
        // Backtrack to depth 0 and try the second sibling: cursors reset.
        assert!(correction.init_process_state(0));
        assert_eq!(correction.input_index(), 0);
        assert_eq!(correction.diffs(), 0);
        assert_eq!(correction.output_index(), 0);
    }

    #[test]
    fn init_process_state_exhausts_children() {
        let mut correction = engine_for("a");
        correction.init_correction_state(5, 2, false);
        assert!(correction.init_process_state(0));
        assert!(correction.init_process_state(0));
        assert!(!correction.init_process_state(0));
        assert_eq!(correction.tree_parent_index(0), None);
    }

    #[test]
    fn needs_to_prune_on_diff_budget() {
        let layout = KeyboardLayout::qwerty();
        // Short input: budget is 2 diffs.
        let mut correction = engine_for("rfd");
        correction.init_correction_state(0, 1, false);
        // All three are near misses ('r'~'t', 'f'~'g', 'd'~'e'), 3 diffs.
        for (i, c) in "tge".chars().enumerate() {
            assert!(correction.init_process_state(i));
            let outcome = correction.process_char_and_calc_state(&layout, c, i == 2);
            assert!(!outcome.is_unrelated());
            correction.go_down_tree(i, 1, 0);
        }
        assert_eq!(correction.diffs(), 3);
        assert!(correction.needs_to_prune());
        assert_eq!(correction.final_freq(100), None);
    }

    #[test]
    fn final_freq_rejects_unconsumed_input() {
        let layout = KeyboardLayout::qwerty();
        // Dictionary word "wo" ends while "word" still has input left.
        let mut correction = engine_for("word");
        let outcomes = walk_path(&mut correction, &layout, "wo");
        assert_eq!(outcomes.last(), Some(&StepOutcome::Matched { terminal: true }));
        assert_eq!(correction.final_freq(100), None);
    }

    #[test]
    fn final_freq_rejects_the_typed_word_itself() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("word");
        walk_path(&mut correction, &layout, "word");
        assert_eq!(correction.final_freq(100), None);
    }

    #[test]
    fn final_freq_scores_completions() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("wor");
        walk_path(&mut correction, &layout, "word");
        assert!(correction.final_freq(100).is_some());
    }

    #[test]
    fn empty_input_forces_traverse_all() {
        let layout = KeyboardLayout::qwerty();
        let mut correction = engine_for("");
        correction.init_correction_state(0, 1, false);
        assert!(correction.init_process_state(0));
        let outcome = correction.process_char_and_calc_state(&layout, 'x', false);
        assert_eq!(outcome, StepOutcome::TraverseAll { terminal: false });
    }

    #[test]
    fn init_correction_rejects_oversized_input() {
        let mut correction = Correction::new(2, 2);
        let long: Vec<char> = std::iter::repeat_n('a', MAX_WORD_LENGTH + 1).collect();
        assert_eq!(
            correction.init_correction(&long, MAX_WORD_LENGTH),
            Err(CorrectError::InputTooLong { len: MAX_WORD_LENGTH + 1, max: MAX_WORD_LENGTH })
        );
        assert_eq!(
            correction.init_correction(&long, MAX_WORD_LENGTH + 1),
            Err(CorrectError::CapacityExceeded {
                max: MAX_WORD_LENGTH + 1,
                cap: MAX_WORD_LENGTH
            })
        );
    }
}
