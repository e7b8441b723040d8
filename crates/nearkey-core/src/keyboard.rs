// Keyboard layouts and the key-neighbor table behind the proximity model.

use hashbrown::{HashMap, HashSet};

use crate::character::simple_lower;
use crate::proximity::{CharProximity, ProximityModel};

/// A physical keyboard layout described as staggered rows of keys.
///
/// The layout precomputes, for every key, the set of keys one position away
/// horizontally or on an adjacent row. Classification is case-insensitive;
/// characters not on the layout only ever match themselves.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    neighbors: HashMap<char, Vec<char>>,
    near_space: HashSet<char>,
}

impl KeyboardLayout {
    /// Build a layout from key rows (top to bottom) plus the keys bordering
    /// the space bar.
    ///
    /// Rows are treated as staggered: a key neighbors the keys directly left
    /// and right of it, and the keys at the same and adjacent columns in the
    /// rows above and below.
    pub fn from_rows(rows: &[&str], near_space_keys: &str) -> Self {
        let grid: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.chars().map(simple_lower).collect())
            .collect();

        let mut neighbors: HashMap<char, Vec<char>> = HashMap::new();
        for (r, row) in grid.iter().enumerate() {
            for (i, &key) in row.iter().enumerate() {
                let entry = neighbors.entry(key).or_default();
                // Same row, one key left and right.
                for j in [i.wrapping_sub(1), i + 1] {
                    if let Some(&n) = row.get(j) {
                        entry.push(n);
                    }
                }
                // Adjacent rows, same column and one either side.
                for other in [r.wrapping_sub(1), r + 1] {
                    let Some(other_row) = grid.get(other) else {
                        continue;
                    };
                    for j in [i.wrapping_sub(1), i, i + 1] {
                        if let Some(&n) = other_row.get(j) {
                            entry.push(n);
                        }
                    }
                }
            }
        }

        let near_space = near_space_keys.chars().map(simple_lower).collect();
        Self { neighbors, near_space }
    }

    /// The standard US QWERTY letter block.
    pub fn qwerty() -> Self {
        Self::from_rows(&["qwertyuiop", "asdfghjkl", "zxcvbnm"], "cvbnm")
    }

    /// The keys recorded as neighbors of `key`, if it is on the layout.
    pub fn neighbors_of(&self, key: char) -> Option<&[char]> {
        self.neighbors.get(&simple_lower(key)).map(Vec::as_slice)
    }
}

impl ProximityModel for KeyboardLayout {
    fn classify(&self, typed: char, candidate: char) -> CharProximity {
        let typed = simple_lower(typed);
        let candidate = simple_lower(candidate);
        if typed == candidate {
            return CharProximity::Exact;
        }
        match self.neighbors.get(&typed) {
            Some(near) if near.contains(&candidate) => CharProximity::Near,
            _ => CharProximity::Unrelated,
        }
    }

    fn near_space(&self, typed: char) -> bool {
        self.near_space.contains(&simple_lower(typed))
    }
}
