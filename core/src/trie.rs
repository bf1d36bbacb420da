/// Prefix trie over characters, used for longest-match charmaps.
use std::collections::HashMap;

/// A prefix tree mapping character sequences to values.
///
/// Both the grapheme-to-phoneme charmap and the baseline grapheme-to-grapheme
/// charmaps are stored this way; segmentation walks the trie from a position
/// and takes the longest key that matches.
///
/// # Example
/// ```
/// use libmayek_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("ক", 1);
/// trie.insert("ক্", 2);
///
/// let input: Vec<char> = "ক্ষ".chars().collect();
/// let prefixes = trie.walk_prefixes(&input, 0);
/// assert_eq!(prefixes, vec![(1, &1), (2, &2)]);
/// assert_eq!(trie.longest_match(&input, 0), Some((2, &2)));
/// ```
#[derive(Debug)]
pub struct TrieNode<V> {
    children: HashMap<char, Box<TrieNode<V>>>,
    value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieNode<V> {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }

    /// Insert a key, replacing any value already stored for it.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut node = self;
        for ch in key.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.value = Some(value);
    }

    /// Walk the trie from `start` and return every stored key that matches.
    ///
    /// Returns `(end_index, value)` pairs where `end_index` is the exclusive
    /// character index after the match, in order of increasing length.
    pub fn walk_prefixes(&self, input: &[char], start: usize) -> Vec<(usize, &V)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            let ch = input[idx];
            if let Some(child) = node.children.get(&ch) {
                node = child;
                idx += 1;
                if let Some(v) = &node.value {
                    res.push((idx, v));
                }
            } else {
                break;
            }
        }
        res
    }

    /// The longest stored key starting at `start`.
    pub fn longest_match(&self, input: &[char], start: usize) -> Option<(usize, &V)> {
        self.walk_prefixes(input, start).pop()
    }

    /// Length in characters of the longest stored key.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_replace() {
        let mut trie = TrieNode::new();
        trie.insert("আই", "AI");
        trie.insert("আ", "A");

        let input: Vec<char> = "আইই".chars().collect();
        assert_eq!(trie.longest_match(&input, 0), Some((2, &"AI")));
        assert_eq!(trie.longest_match(&input, 2), None);
        assert_eq!(trie.depth(), 2);

        trie.insert("আ", "AA");
        assert_eq!(trie.walk_prefixes(&input, 0), vec![(1, &"AA"), (2, &"AI")]);
    }

    #[test]
    fn test_walk_prefixes_multiple_matches() {
        let mut trie = TrieNode::new();
        trie.insert("a", 1);
        trie.insert("ab", 2);
        trie.insert("abc", 3);

        let input: Vec<char> = "abd".chars().collect();
        assert_eq!(trie.walk_prefixes(&input, 0), vec![(1, &1), (2, &2)]);
        assert_eq!(trie.longest_match(&input, 0), Some((2, &2)));
        assert_eq!(trie.longest_match(&input, 2), None);
    }

    #[test]
    fn test_walk_past_end() {
        let mut trie = TrieNode::new();
        trie.insert("x", ());
        let input: Vec<char> = "x".chars().collect();
        assert!(trie.walk_prefixes(&input, 1).is_empty());
    }
}
