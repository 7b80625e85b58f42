//! Tree construction helpers
//!
//! Level-order layout: entries fill child slots breadth-first, left
//! before right. A hole (`None`) consumes a slot but opens no slots of
//! its own, so `[1, null, 2, 3]` puts 3 under 2, not under the hole.

use std::collections::VecDeque;
use std::str::FromStr;

use super::{NodeId, Side, Tree};
use crate::TreeError;

/// Tokens accepted as a hole in textual level-order input
const HOLE_TOKENS: [&str; 5] = ["null", "nil", "none", "#", "_"];

impl<T> Tree<T> {
    /// Build a tree from a breadth-first list of optional values
    ///
    /// Extra holes past the last open slot are ignored; extra values are
    /// rejected with [`TreeError::OrphanEntry`].
    pub fn from_level_order<I>(entries: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut tree = Tree::new();
        let mut slots: VecDeque<(NodeId, Side)> = VecDeque::new();

        for (position, entry) in entries.into_iter().enumerate() {
            if position == 0 {
                if let Some(value) = entry {
                    let root = tree.add_node(value);
                    tree.root = Some(root);
                    slots.extend([(root, Side::Left), (root, Side::Right)]);
                }
                continue;
            }

            match (slots.pop_front(), entry) {
                (Some((parent, side)), Some(value)) => {
                    let child = tree.insert(parent, side, value)?;
                    slots.extend([(child, Side::Left), (child, Side::Right)]);
                }
                (Some(_), None) | (None, None) => {}
                (None, Some(_)) => return Err(TreeError::OrphanEntry { position }),
            }
        }

        Ok(tree)
    }
}

impl<T: FromStr> FromStr for Tree<T> {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tree::from_level_order(parse_level_order(s)?)
    }
}

/// Parse textual level-order input such as `"[1, 2, 3, null, 5]"`
///
/// Tokens are separated by commas and/or whitespace; surrounding
/// brackets are optional.
pub fn parse_level_order<T: FromStr>(input: &str) -> Result<Vec<Option<T>>, TreeError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            if HOLE_TOKENS
                .iter()
                .any(|hole| token.eq_ignore_ascii_case(hole))
            {
                return Ok(None);
            }
            token
                .parse::<T>()
                .map(Some)
                .map_err(|_| TreeError::InvalidToken {
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// The reference tree
///
/// ```text
///       1
///      / \
///     2   3
///    / \
///   4   5
/// ```
///
/// In-order: 4 2 5 1 3
pub fn sample() -> Tree<i64> {
    let mut tree = Tree::new();
    let [one, two, three, four, five] = [1, 2, 3, 4, 5].map(|value| tree.add_node(value));

    tree.root = Some(one);
    tree.link(one, Side::Left, two);
    tree.link(one, Side::Right, three);
    tree.link(two, Side::Left, four);
    tree.link(two, Side::Right, five);
    tree
}
