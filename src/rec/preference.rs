//! In-memory user/item interaction data.
//!
//! Users and items are interned to dense indices in first-seen order; each
//! side keeps an adjacency list so both "items of a user" and "users of an
//! item" are O(1) to reach. Repeated `(user, item)` pairs are stored once.
//!
//! ```text
//!   pairs: (u1,i1) (u2,i1) (u1,i2)
//!
//!   users: [u1, u2]            items: [i1, i2]
//!   user_items: u1 → [0, 1]    item_users: i1 → [0, 1]
//!               u2 → [0]                   i2 → [0]
//! ```
//!
//! ## Input format
//!
//! [`read_tsv`](PreferenceData::read_tsv) reads one interaction per line:
//! `user<TAB>item`, optionally followed by more tab-separated columns (a
//! rating or timestamp) which are ignored. Blank lines and lines starting
//! with `#` are skipped.
use std::hash::Hash;
use std::io::BufRead;
use std::str::FromStr;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::ParseError;

/// Interaction store keyed by user and item.
///
/// # Example
///
/// ```
/// use topnkit::rec::PreferenceData;
///
/// let data = PreferenceData::from_pairs([("ann", 1), ("bob", 1), ("ann", 2), ("ann", 1)]);
/// assert_eq!(data.num_users(), 2);
/// assert_eq!(data.num_items(), 2);
/// assert_eq!(data.num_interactions(), 3);
/// assert_eq!(data.num_users_of(&1), 2);
/// assert!(data.has_interacted(&"ann", &2));
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceData<U, I> {
    users: Vec<U>,
    items: Vec<I>,
    user_index: FxHashMap<U, usize>,
    item_index: FxHashMap<I, usize>,
    user_items: Vec<Vec<usize>>,
    item_users: Vec<Vec<usize>>,
    pairs: FxHashSet<(usize, usize)>,
}

impl<U, I> Default for PreferenceData<U, I> {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            items: Vec::new(),
            user_index: FxHashMap::default(),
            item_index: FxHashMap::default(),
            user_items: Vec::new(),
            item_users: Vec::new(),
            pairs: FxHashSet::default(),
        }
    }
}

impl<U, I> PreferenceData<U, I>
where
    U: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `(user, item)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (U, I)>) -> Self {
        let mut data = Self::new();
        for (user, item) in pairs {
            data.insert(user, item);
        }
        data
    }

    /// Records an interaction; returns `false` if it was already present.
    pub fn insert(&mut self, user: U, item: I) -> bool {
        let uidx = match self.user_index.get(&user) {
            Some(&idx) => idx,
            None => {
                let idx = self.users.len();
                self.users.push(user.clone());
                self.user_items.push(Vec::new());
                self.user_index.insert(user, idx);
                idx
            },
        };
        let iidx = match self.item_index.get(&item) {
            Some(&idx) => idx,
            None => {
                let idx = self.items.len();
                self.items.push(item.clone());
                self.item_users.push(Vec::new());
                self.item_index.insert(item, idx);
                idx
            },
        };

        if !self.pairs.insert((uidx, iidx)) {
            return false;
        }
        self.user_items[uidx].push(iidx);
        self.item_users[iidx].push(uidx);
        true
    }

    /// Returns the number of distinct users.
    pub fn num_users(&self) -> usize {
        self.users.len()
    }

    /// Returns the number of distinct items with at least one interaction.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of distinct `(user, item)` pairs.
    pub fn num_interactions(&self) -> usize {
        self.pairs.len()
    }

    /// Users in first-seen order.
    pub fn users(&self) -> &[U] {
        &self.users
    }

    /// Items in first-seen order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Items `user` interacted with, in first-seen order. Empty for unknown
    /// users.
    pub fn items_of<'a>(&'a self, user: &U) -> impl Iterator<Item = &'a I> + use<'a, U, I> {
        let indices: &[usize] = match self.user_index.get(user) {
            Some(&uidx) => self.user_items[uidx].as_slice(),
            None => &[],
        };
        indices.iter().map(|&iidx| &self.items[iidx])
    }

    /// Number of distinct users who interacted with `item`.
    pub fn num_users_of(&self, item: &I) -> usize {
        self.item_index
            .get(item)
            .map_or(0, |&iidx| self.item_users[iidx].len())
    }

    /// Returns `true` if `user` interacted with `item`.
    pub fn has_interacted(&self, user: &U, item: &I) -> bool {
        match (self.user_index.get(user), self.item_index.get(item)) {
            (Some(&uidx), Some(&iidx)) => self.pairs.contains(&(uidx, iidx)),
            _ => false,
        }
    }

    /// Iterates `(item, distinct user count)` for every item.
    pub fn item_user_counts(&self) -> impl Iterator<Item = (&I, usize)> + '_ {
        self.items
            .iter()
            .zip(self.item_users.iter())
            .map(|(item, users)| (item, users.len()))
    }
}

impl<U, I> PreferenceData<U, I>
where
    U: Eq + Hash + Clone + FromStr,
    I: Eq + Hash + Clone + FromStr,
    U::Err: std::fmt::Display,
    I::Err: std::fmt::Display,
{
    /// Reads `user<TAB>item[<TAB>...]` lines.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] with the 1-based line number for a line with
    /// fewer than two columns or with a user/item that fails to parse, and
    /// with line `0` if reading fails.
    ///
    /// # Example
    ///
    /// ```
    /// use topnkit::rec::PreferenceData;
    ///
    /// let input = "# user\titem\n1\t10\n1\t11\t4.5\n\n2\t10\n";
    /// let data: PreferenceData<u32, u32> = PreferenceData::read_tsv(input.as_bytes()).unwrap();
    /// assert_eq!(data.num_interactions(), 3);
    /// assert_eq!(data.num_users_of(&10), 2);
    /// ```
    pub fn read_tsv<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut data = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let trimmed = line.trim_end_matches('\r');
            if trimmed.trim().is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut columns = trimmed.split('\t');
            let (Some(user), Some(item)) = (columns.next(), columns.next()) else {
                return Err(ParseError::new(line_no, "expected user<TAB>item"));
            };
            let user = user
                .trim()
                .parse::<U>()
                .map_err(|e| ParseError::new(line_no, format!("invalid user {:?}: {}", user, e)))?;
            let item = item
                .trim()
                .parse::<I>()
                .map_err(|e| ParseError::new(line_no, format!("invalid item {:?}: {}", item, e)))?;
            data.insert(user, item);
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_pairs_counted_once() {
        let mut data = PreferenceData::new();
        assert!(data.insert("u", "i"));
        assert!(!data.insert("u", "i"));
        assert_eq!(data.num_interactions(), 1);
        assert_eq!(data.num_users_of(&"i"), 1);
    }

    #[test]
    fn first_seen_order_is_kept() {
        let data = PreferenceData::from_pairs([(3, 'c'), (1, 'a'), (3, 'b'), (2, 'a')]);
        assert_eq!(data.users(), &[3, 1, 2]);
        assert_eq!(data.items(), &['c', 'a', 'b']);
        assert_eq!(data.items_of(&3).copied().collect::<Vec<_>>(), vec!['c', 'b']);
    }

    #[test]
    fn unknown_user_and_item_are_empty() {
        let data = PreferenceData::from_pairs([(1, 1)]);
        assert_eq!(data.items_of(&9).count(), 0);
        assert_eq!(data.num_users_of(&9), 0);
        assert!(!data.has_interacted(&9, &1));
        assert!(!data.has_interacted(&1, &9));
    }

    #[test]
    fn item_user_counts_cover_every_item() {
        let data = PreferenceData::from_pairs([(1, 'x'), (2, 'x'), (2, 'y')]);
        let counts: Vec<(char, usize)> = data.item_user_counts().map(|(i, n)| (*i, n)).collect();
        assert_eq!(counts, vec![('x', 2), ('y', 1)]);
    }

    #[test]
    fn read_tsv_skips_comments_and_blank_lines() {
        let input = "# header\n\nalice\tbook\t5\r\nbob\tbook\nalice\tpen\n";
        let data: PreferenceData<String, String> =
            PreferenceData::read_tsv(input.as_bytes()).unwrap();
        assert_eq!(data.num_users(), 2);
        assert_eq!(data.num_items(), 2);
        assert_eq!(data.num_users_of(&"book".to_string()), 2);
    }

    #[test]
    fn read_tsv_reports_missing_column() {
        let input = "1\t2\n3\n";
        let err = PreferenceData::<u32, u32>::read_tsv(input.as_bytes()).unwrap_err();
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn read_tsv_reports_unparsable_value() {
        let input = "1\t2\nx\t3\n";
        let err = PreferenceData::<u32, u32>::read_tsv(input.as_bytes()).unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(err.message().contains("invalid user"));
    }
}
