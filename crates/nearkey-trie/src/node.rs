// Packed node record layout for the binary trie format.

use bytemuck::{Pod, Zeroable};

/// Flag bit marking a node that ends a valid dictionary word.
pub const FLAG_TERMINAL: u16 = 0x0001;

/// One trie node (16 bytes, little-endian on disk).
///
/// - `ch` (u32): Unicode scalar value of the node's character
/// - `first_child` (u32): position of the first child record
/// - `child_count` (u16): number of children, stored contiguously from
///   `first_child`
/// - `flags` (u16): see `FLAG_TERMINAL`
/// - `freq` (u32): word frequency; meaningful only on terminal nodes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct NodeRecord {
    pub ch: u32,
    pub first_child: u32,
    pub child_count: u16,
    pub flags: u16,
    pub freq: u32,
}

impl NodeRecord {
    /// The node's character. Records are validated at load time, so the
    /// stored code point is always a valid scalar value.
    #[inline]
    pub fn character(&self) -> char {
        char::from_u32(self.ch).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Whether this node terminates a dictionary word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.flags & FLAG_TERMINAL != 0
    }
}
