// Frequency ranking: turns raw dictionary frequency plus the engine's
// accumulated match statistics into one comparable integer score.

use crate::session::Correction;

/// Demotion applied once per accumulated diff (percent).
const DIFF_DEMOTION_RATE: i32 = 80;

/// Demotion per assembled character beyond the consumed input (skipped
/// letters, quotes, completion tails) -- longer guesses rank below shorter
/// ones at equal frequency.
const EXTRA_CHAR_DEMOTION_RATE: i32 = 90;

/// Demotion when a skipped-letter correction is configured.
const SKIPPED_CHAR_DEMOTION_RATE: i32 = 70;

/// Harsher skip demotion when the letter missing is the word's first: users
/// rarely drop the opening character.
const SKIPPED_FIRST_CHAR_DEMOTION_RATE: i32 = 55;

/// Demotion when an excessive-character correction is configured.
const EXCESSIVE_CHAR_DEMOTION_RATE: i32 = 75;

/// Demotion when a transposition is configured.
const TRANSPOSED_CHAR_DEMOTION_RATE: i32 = 67;

/// Demotion when a stray near-space press is being stepped over.
const SPACE_PROXIMITY_DEMOTION_RATE: i32 = 55;

/// Split-candidate demotion for a missing space.
const MISSING_SPACE_SPLIT_DEMOTION_RATE: i32 = 80;

/// Split-candidate demotion when the separator was a stray near-space press,
/// a less certain guess than a plainly missing space.
const SPACE_PROXIMITY_SPLIT_DEMOTION_RATE: i32 = 65;

/// `freq * rate / 100` without intermediate overflow.
fn multiply_rate(freq: i32, rate: i32) -> i32 {
    ((freq as i64 * rate as i64) / 100) as i32
}

/// Saturating multiply keeping scores on the `i32` scale.
fn multiply_capped(freq: i32, multiplier: i32) -> i32 {
    freq.saturating_mul(multiplier)
}

/// Combine a candidate's raw dictionary frequency with the traversal
/// statistics into the final comparable score.
///
/// The score is monotonically non-decreasing in `matched_count` and
/// non-increasing in the engine's diff count, and identical inputs always
/// produce the identical integer.
pub fn calculate_final_freq(
    consumed: usize,
    word_len: usize,
    matched_count: usize,
    freq: i32,
    same_length: bool,
    correction: &Correction,
) -> i32 {
    let mut final_freq = freq.max(0);

    for _ in 0..matched_count {
        final_freq = multiply_capped(final_freq, correction.typed_letter_multiplier());
    }
    for _ in 0..correction.diffs() {
        final_freq = multiply_rate(final_freq, DIFF_DEMOTION_RATE);
    }
    for _ in consumed..word_len {
        final_freq = multiply_rate(final_freq, EXTRA_CHAR_DEMOTION_RATE);
    }

    let params = correction.params();
    if params.skip_pos.is_some() {
        let rate = if correction.skipped_output_index() == Some(0) {
            SKIPPED_FIRST_CHAR_DEMOTION_RATE
        } else {
            SKIPPED_CHAR_DEMOTION_RATE
        };
        final_freq = multiply_rate(final_freq, rate);
    }
    if params.excessive_pos.is_some() {
        final_freq = multiply_rate(final_freq, EXCESSIVE_CHAR_DEMOTION_RATE);
    }
    if params.transposed_pos.is_some() {
        final_freq = multiply_rate(final_freq, TRANSPOSED_CHAR_DEMOTION_RATE);
    }
    if params.space_proximity_pos.is_some() {
        final_freq = multiply_rate(final_freq, SPACE_PROXIMITY_DEMOTION_RATE);
    }

    if same_length {
        final_freq = multiply_capped(final_freq, correction.full_word_multiplier());
    }
    final_freq
}

/// Score a candidate that reads the typed sequence as two concatenated
/// dictionary words.
///
/// The combination takes the weaker of the two frequencies and demotes it,
/// so a split guess always ranks below a standalone match of equal
/// frequency while staying on the same integer scale.
pub fn calc_freq_for_split_two_words(
    first_freq: i32,
    second_freq: i32,
    correction: &Correction,
) -> Option<i32> {
    if first_freq <= 0 || second_freq <= 0 {
        return None;
    }
    let rate = if correction.space_proximity_pos().is_some() {
        SPACE_PROXIMITY_SPLIT_DEMOTION_RATE
    } else {
        MISSING_SPACE_SPLIT_DEMOTION_RATE
    };
    Some(multiply_rate(first_freq.min(second_freq), rate).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CorrectionParams;
    use nearkey_core::MAX_WORD_LENGTH;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn session(input: &str, params: CorrectionParams) -> Correction {
        let mut correction = Correction::new(2, 2);
        correction.init_correction(&chars(input), MAX_WORD_LENGTH).unwrap();
        correction.set_correction_params(params).unwrap();
        correction.init_correction_state(0, 1, false);
        correction
    }

    #[test]
    fn monotonic_in_matched_count() {
        let correction = session("word", CorrectionParams::exact());
        let mut previous = 0;
        for matched in 0..8 {
            let score = calculate_final_freq(4, 4, matched, 100, true, &correction);
            assert!(score >= previous, "matched={matched}: {score} < {previous}");
            previous = score;
        }
    }

    #[test]
    fn monotonic_in_diffs() {
        use nearkey_core::KeyboardLayout;
        let layout = KeyboardLayout::qwerty();

        // Same dictionary path, one exact and one off-by-a-neighbor input.
        let mut clean = session("the", CorrectionParams::exact());
        let mut noisy = session("rhe", CorrectionParams::exact());
        for (i, c) in "the".chars().enumerate() {
            assert!(clean.init_process_state(i));
            clean.process_char_and_calc_state(&layout, c, i == 2);
            clean.go_down_tree(i, 1, 0);
            assert!(noisy.init_process_state(i));
            noisy.process_char_and_calc_state(&layout, c, i == 2);
            noisy.go_down_tree(i, 1, 0);
        }
        assert_eq!(clean.diffs(), 0);
        assert_eq!(noisy.diffs(), 1);
        // Hold every explicit input fixed; only the diff count differs.
        let clean_score = calculate_final_freq(3, 3, 3, 100, true, &clean);
        let noisy_score = calculate_final_freq(3, 3, 3, 100, true, &noisy);
        assert!(noisy_score < clean_score);
    }

    #[test]
    fn exact_match_gets_the_full_bonus() {
        let correction = session("word", CorrectionParams::exact());
        // 100 * 2^4 matched, * 2 same-length, no demotions.
        assert_eq!(calculate_final_freq(4, 4, 4, 100, true, &correction), 3200);
    }

    #[test]
    fn configured_corrections_demote() {
        let exact = session("word", CorrectionParams::exact());
        let transposed = session("word", CorrectionParams::transposed(0));
        let base = calculate_final_freq(4, 4, 2, 100, true, &exact);
        let demoted = calculate_final_freq(4, 4, 2, 100, true, &transposed);
        assert!(demoted < base);
    }

    #[test]
    fn first_letter_skip_demotes_hardest() {
        // Both sessions walk a dictionary path whose skipped character sits
        // at a different output position.
        use nearkey_core::KeyboardLayout;
        let layout = KeyboardLayout::qwerty();

        let mut mid = session("wrld", CorrectionParams::skip(1));
        for (i, c) in "world".chars().enumerate() {
            assert!(mid.init_process_state(i));
            assert!(!mid.process_char_and_calc_state(&layout, c, i == 4).is_unrelated());
            mid.go_down_tree(i, 1, 0);
        }
        let mut first = session("orld", CorrectionParams::skip(0));
        for (i, c) in "world".chars().enumerate() {
            assert!(first.init_process_state(i));
            assert!(!first.process_char_and_calc_state(&layout, c, i == 4).is_unrelated());
            first.go_down_tree(i, 1, 0);
        }
        let mid_score = mid.final_freq(100).unwrap();
        let first_score = first.final_freq(100).unwrap();
        assert!(first_score < mid_score, "{first_score} vs {mid_score}");
    }

    #[test]
    fn capped_multiplication_does_not_wrap() {
        let correction = session("word", CorrectionParams::exact());
        let score = calculate_final_freq(4, 4, 40, i32::MAX, true, &correction);
        assert_eq!(score, i32::MAX);
    }

    #[test]
    fn negative_raw_frequency_scores_zero() {
        let correction = session("word", CorrectionParams::exact());
        assert_eq!(calculate_final_freq(4, 4, 4, -5, false, &correction), 0);
    }

    #[test]
    fn split_requires_both_frequencies() {
        let correction = session("itis", CorrectionParams::missing_space(2));
        assert_eq!(calc_freq_for_split_two_words(0, 200, &correction), None);
        assert_eq!(calc_freq_for_split_two_words(200, -1, &correction), None);
        assert!(calc_freq_for_split_two_words(200, 220, &correction).is_some());
    }

    #[test]
    fn split_ranks_below_standalone() {
        let split = session("itis", CorrectionParams::missing_space(2));
        let split_score = calc_freq_for_split_two_words(200, 200, &split).unwrap();
        // A standalone exact match of the same frequency.
        let standalone = session("itis", CorrectionParams::exact());
        let standalone_score = calculate_final_freq(4, 4, 4, 200, true, &standalone);
        assert!(split_score < standalone_score);
        assert!(split_score > 0);
    }

    #[test]
    fn space_proximity_split_ranks_below_missing_space_split() {
        let missing = session("itis", CorrectionParams::missing_space(2));
        let stray = session("itbis", CorrectionParams::space_proximity(2));
        let missing_score = calc_freq_for_split_two_words(200, 200, &missing).unwrap();
        let stray_score = calc_freq_for_split_two_words(200, 200, &stray).unwrap();
        assert!(stray_score < missing_score);
    }

    #[test]
    fn deterministic() {
        let correction = session("word", CorrectionParams::exact());
        let a = calculate_final_freq(4, 5, 3, 123, false, &correction);
        let b = calculate_final_freq(4, 5, 3, 123, false, &correction);
        assert_eq!(a, b);
    }
}
