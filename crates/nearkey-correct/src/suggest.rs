// The trie-walking driver: enumerates correction-parameter variants,
// drives the engine over the dictionary, and collects ranked suggestions.

use hashbrown::HashMap;

use nearkey_core::character::simple_lower;
use nearkey_core::proximity::ProximityModel;
use nearkey_core::MAX_WORD_LENGTH;

use nearkey_trie::Trie;

use crate::params::CorrectionParams;
use crate::session::{Correction, StepOutcome};

const DEFAULT_TYPED_LETTER_MULTIPLIER: i32 = 2;
const DEFAULT_FULL_WORD_MULTIPLIER: i32 = 2;
const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Node-visit budget for one `suggest` call, summed over all queries. Keeps
/// worst-case latency bounded on adversarial inputs; ordinary inputs finish
/// well under it.
const DEFAULT_VISIT_BUDGET: usize = 50_000;

/// A ranked correction candidate. Higher scores are better.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub score: i32,
}

/// Accumulates candidates across queries, keeping the best score per word.
#[derive(Debug)]
pub struct SuggestionPool {
    max_suggestions: usize,
    best: HashMap<String, i32>,
}

impl SuggestionPool {
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            max_suggestions,
            best: HashMap::new(),
        }
    }

    /// Record a candidate; a word seen twice keeps its higher score.
    pub fn add(&mut self, word: String, score: i32) {
        let entry = self.best.entry(word).or_insert(score);
        *entry = (*entry).max(score);
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Sort by descending score (ties alphabetically, for determinism) and
    /// truncate to the configured maximum.
    pub fn into_ranked(self) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = self
            .best
            .into_iter()
            .map(|(word, score)| Suggestion { word, score })
            .collect();
        suggestions.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        suggestions.truncate(self.max_suggestions);
        suggestions
    }
}

/// Which kind of word boundary a split candidate assumes.
#[derive(Debug, Clone, Copy)]
enum SplitKind {
    /// A space was omitted between two words.
    MissingSpace,
    /// A key next to the space bar was pressed instead of a space.
    SpaceProximity,
}

/// Produces ranked correction suggestions for typed input.
///
/// The suggester owns the backtracking policy the engine deliberately does
/// not: it decides which correction positions to try (one query each), walks
/// the trie with the engine's explicit frame stack, and abandons branches the
/// engine classifies as unrelated or prunable.
pub struct Suggester<'a> {
    trie: &'a Trie,
    model: &'a dyn ProximityModel,
    typed_letter_multiplier: i32,
    full_word_multiplier: i32,
    max_suggestions: usize,
    visit_budget: usize,
}

impl<'a> Suggester<'a> {
    pub fn new(trie: &'a Trie, model: &'a dyn ProximityModel) -> Self {
        Self {
            trie,
            model,
            typed_letter_multiplier: DEFAULT_TYPED_LETTER_MULTIPLIER,
            full_word_multiplier: DEFAULT_FULL_WORD_MULTIPLIER,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            visit_budget: DEFAULT_VISIT_BUDGET,
        }
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn with_multipliers(mut self, typed_letter: i32, full_word: i32) -> Self {
        self.typed_letter_multiplier = typed_letter;
        self.full_word_multiplier = full_word;
        self
    }

    pub fn with_visit_budget(mut self, visit_budget: usize) -> Self {
        self.visit_budget = visit_budget;
        self
    }

    /// Ranked suggestions for `typed`, best first.
    ///
    /// Input is lowercased. Empty input, or input longer than any supported
    /// word, yields nothing.
    pub fn suggest(&self, typed: &str) -> Vec<Suggestion> {
        let input: Vec<char> = typed.chars().map(simple_lower).collect();
        if input.is_empty() || input.len() > MAX_WORD_LENGTH {
            return Vec::new();
        }

        let mut correction = Correction::new(self.typed_letter_multiplier, self.full_word_multiplier);
        let mut pool = SuggestionPool::new(self.max_suggestions);
        let mut budget = self.visit_budget;

        if correction.init_correction(&input, MAX_WORD_LENGTH).is_err() {
            return Vec::new();
        }

        for params in self.single_word_variants(input.len()) {
            if correction.set_correction_params(params).is_err() {
                continue;
            }
            self.run_query(&mut correction, &mut pool, &mut budget);
            if budget == 0 {
                return pool.into_ranked();
            }
        }

        for pos in 1..input.len() {
            self.try_split(&mut correction, &input, pos, SplitKind::MissingSpace, &mut pool, &mut budget);
        }
        for pos in 1..input.len().saturating_sub(1) {
            if self.model.near_space(input[pos]) {
                self.try_split(&mut correction, &input, pos, SplitKind::SpaceProximity, &mut pool, &mut budget);
            }
        }

        pool.into_ranked()
    }

    /// One parameter set per plausible correction position. The engine never
    /// searches positions itself, so every choice is a separate query.
    fn single_word_variants(&self, len: usize) -> Vec<CorrectionParams> {
        let mut variants = vec![CorrectionParams::exact()];
        for pos in 0..len {
            variants.push(CorrectionParams::skip(pos));
        }
        if len >= 2 {
            for pos in 0..len {
                variants.push(CorrectionParams::excessive(pos));
            }
            for pos in 0..len - 1 {
                variants.push(CorrectionParams::transposed(pos));
            }
        }
        variants
    }

    /// One full depth-first walk of the dictionary under the currently
    /// configured parameters, scoring every in-budget terminal reached.
    fn run_query(&self, correction: &mut Correction, pool: &mut SuggestionPool, budget: &mut usize) {
        correction.init_correction_state(self.trie.root_pos(), self.trie.root_child_count(), false);
        let mut depth = 0usize;
        loop {
            if *budget == 0 {
                return;
            }
            if !correction.init_process_state(depth) {
                match correction.tree_parent_index(depth) {
                    Some(parent) => {
                        depth = parent;
                        continue;
                    }
                    None => return,
                }
            }
            *budget -= 1;

            let pos = correction.tree_sibling_pos(depth);
            let node = self.trie.node(pos);
            correction.set_tree_sibling_pos(depth, pos + 1);

            let outcome =
                correction.process_char_and_calc_state(self.model, node.character(), node.is_terminal());
            if outcome.is_unrelated() || correction.needs_to_prune() {
                continue;
            }
            if outcome.is_terminal() {
                if let Some(score) = correction.final_freq(node.freq as i32) {
                    pool.add(correction.terminal_word().iter().collect(), score);
                }
            }
            if node.child_count > 0 {
                depth = correction.go_down_tree(depth, node.child_count as u32, node.first_child);
            }
        }
    }

    /// Score the input as two words joined at `pos`.
    ///
    /// Each half must be covered exactly (proximity matches allowed, no
    /// positional corrections) by a dictionary word; the split kind is then
    /// stamped on the session so the ranking picks the matching demotion.
    fn try_split(
        &self,
        correction: &mut Correction,
        input: &[char],
        pos: usize,
        kind: SplitKind,
        pool: &mut SuggestionPool,
        budget: &mut usize,
    ) {
        let first_half = &input[..pos];
        let second_half = match kind {
            SplitKind::MissingSpace => &input[pos..],
            SplitKind::SpaceProximity => &input[pos + 1..],
        };

        let Some((first_word, first_freq)) = self.best_half_match(correction, first_half, budget)
        else {
            return;
        };
        let Some((second_word, second_freq)) = self.best_half_match(correction, second_half, budget)
        else {
            return;
        };

        if correction.init_correction(input, MAX_WORD_LENGTH).is_err() {
            return;
        }
        let params = match kind {
            SplitKind::MissingSpace => CorrectionParams::missing_space(pos),
            SplitKind::SpaceProximity => CorrectionParams::space_proximity(pos),
        };
        if correction.set_correction_params(params).is_err() {
            return;
        }
        if let Some(score) = correction.freq_for_split_two_words(first_freq, second_freq) {
            pool.add(format!("{first_word} {second_word}"), score);
        }
    }

    /// The best dictionary word covering `half` exactly: same length, full
    /// consumption, proximity matches only. Returns the word and its raw
    /// frequency.
    fn best_half_match(
        &self,
        correction: &mut Correction,
        half: &[char],
        budget: &mut usize,
    ) -> Option<(String, i32)> {
        if half.len() < 2 || correction.init_correction(half, MAX_WORD_LENGTH).is_err() {
            return None;
        }
        correction.init_correction_state(self.trie.root_pos(), self.trie.root_child_count(), false);

        let mut best: Option<(String, i32, i32)> = None;
        let mut depth = 0usize;
        loop {
            if *budget == 0 {
                break;
            }
            if !correction.init_process_state(depth) {
                match correction.tree_parent_index(depth) {
                    Some(parent) => {
                        depth = parent;
                        continue;
                    }
                    None => break,
                }
            }
            *budget -= 1;

            let pos = correction.tree_sibling_pos(depth);
            let node = self.trie.node(pos);
            correction.set_tree_sibling_pos(depth, pos + 1);

            let outcome =
                correction.process_char_and_calc_state(self.model, node.character(), node.is_terminal());
            if outcome.is_unrelated() || correction.needs_to_prune() {
                continue;
            }
            if outcome == (StepOutcome::Matched { terminal: true })
                && correction.input_index() == half.len()
                && correction.output_index() == half.len()
            {
                let diffs = correction.diffs();
                let freq = node.freq as i32;
                let better = match &best {
                    None => true,
                    Some((_, best_freq, best_diffs)) => {
                        diffs < *best_diffs || (diffs == *best_diffs && freq > *best_freq)
                    }
                };
                if better {
                    best = Some((correction.terminal_word().iter().collect(), freq, diffs));
                }
            }
            // Completions past the half's length can never cover it exactly.
            if node.child_count > 0 && !correction.needs_to_traverse_all() {
                depth = correction.go_down_tree(depth, node.child_count as u32, node.first_child);
            }
        }
        best.map(|(word, freq, _)| (word, freq))
    }
}
