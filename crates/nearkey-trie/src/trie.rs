// The loaded trie and its position-based read interface.

use bytemuck::Zeroable;

use crate::TrieError;
use crate::builder::TrieBuilder;
use crate::format::{self, HEADER_SIZE, TrieHeader};
use crate::node::NodeRecord;

/// A dictionary trie over a flat record array.
///
/// Positions handed to callers are indices into the record array. The
/// root itself is implicit: its children are the records
/// `0..root_child_count`. All other child ranges are
/// `first_child..first_child + child_count` on the parent record.
#[derive(Debug, Clone)]
pub struct Trie {
    records: Vec<NodeRecord>,
    root_child_count: u32,
}

impl Trie {
    pub(crate) fn from_records(records: Vec<NodeRecord>, root_child_count: u32) -> Self {
        Self {
            records,
            root_child_count,
        }
    }

    /// Build a trie directly from a word-frequency slice.
    pub fn from_words(words: &[(&str, u32)]) -> Self {
        let mut builder = TrieBuilder::new();
        for &(word, freq) in words {
            builder.insert(word, freq);
        }
        builder.build()
    }

    /// Load a trie from its binary form.
    ///
    /// The record payload is copied into an owned, properly aligned vector;
    /// the source slice may come from an arbitrary byte offset. Every record
    /// is validated so later position-based reads cannot leave the array or
    /// produce invalid characters.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TrieError> {
        let header = format::parse_header(data)?;
        let node_count = header.node_count as usize;

        let expected = HEADER_SIZE + node_count * size_of::<NodeRecord>();
        if data.len() < expected {
            return Err(TrieError::TooShort {
                expected,
                actual: data.len(),
            });
        }

        let mut records = vec![NodeRecord::zeroed(); node_count];
        let dst = bytemuck::cast_slice_mut::<NodeRecord, u8>(&mut records);
        dst.copy_from_slice(&data[HEADER_SIZE..expected]);

        if header.root_child_count as usize > node_count {
            return Err(TrieError::CorruptNode { index: 0 });
        }
        for (index, record) in records.iter().enumerate() {
            if char::from_u32(record.ch).is_none() {
                return Err(TrieError::CorruptNode { index });
            }
            let end = record.first_child as usize + record.child_count as usize;
            if record.child_count > 0 && end > node_count {
                return Err(TrieError::CorruptNode { index });
            }
        }

        Ok(Self {
            records,
            root_child_count: header.root_child_count,
        })
    }

    /// Serialize to the binary format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = TrieHeader {
            node_count: self.records.len() as u32,
            root_child_count: self.root_child_count,
        };
        let mut out = Vec::with_capacity(HEADER_SIZE + self.records.len() * size_of::<NodeRecord>());
        out.extend_from_slice(&format::write_header(&header));
        out.extend_from_slice(bytemuck::cast_slice(&self.records));
        out
    }

    /// Position of the root's first child.
    #[inline]
    pub fn root_pos(&self) -> u32 {
        0
    }

    /// Number of root children.
    #[inline]
    pub fn root_child_count(&self) -> u32 {
        self.root_child_count
    }

    /// Total number of node records.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.records.len()
    }

    /// The record at `pos`. Positions come from this trie's own child
    /// ranges; anything else is a caller bug.
    #[inline]
    pub fn node(&self, pos: u32) -> &NodeRecord {
        &self.records[pos as usize]
    }

    /// Exact lookup. Returns the frequency of `word` if present.
    pub fn lookup(&self, word: &[char]) -> Option<u32> {
        let mut range = 0..self.root_child_count;
        let mut found: Option<&NodeRecord> = None;
        for &ch in word {
            let mut next = None;
            for pos in range.clone() {
                let record = self.node(pos);
                if record.character() == ch {
                    next = Some(record);
                    break;
                }
            }
            let record = next?;
            range = record.first_child..record.first_child + record.child_count as u32;
            found = Some(record);
        }
        match found {
            Some(record) if record.is_terminal() => Some(record.freq),
            _ => None,
        }
    }
}
