// Per-depth traversal frames: the explicit analogue of a recursive call
// stack, indexed by depth so the engine can backtrack by index.

/// State saved for one trie depth.
///
/// `sibling_pos` is the opaque resume cursor for enumerating the remaining
/// children of the node at this depth; `child_count` counts down as they are
/// consumed. The remaining fields snapshot the engine cursors so
/// `init_process_state` can restore them before each sibling is tried.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CorrectionFrame {
    pub parent_index: Option<usize>,
    pub sibling_pos: u32,
    pub child_count: u32,
    pub input_index: usize,
    pub matched_char_count: usize,
    pub diffs: i32,
    pub traverse_all: bool,
    pub pending_transposition: bool,
    pub skipped_output_index: Option<usize>,
}
