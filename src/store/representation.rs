use serde::{Deserialize, Serialize};

/// Body returned by an insert with `Prefer: return=representation`.
///
/// The store normally answers with a list holding the inserted row, but a
/// bare object is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Representation<T> {
    Rows(Vec<T>),
    Row(T),
}

impl<T> Representation<T> {
    /// Collapses a non-empty list to its first row. An empty list is left as is.
    pub fn into_single(self) -> Self {
        match self {
            Representation::Rows(rows) => {
                let mut rows = rows.into_iter();
                match rows.next() {
                    Some(first) => Representation::Row(first),
                    None => Representation::Rows(Vec::new()),
                }
            }
            row => row,
        }
    }
}
