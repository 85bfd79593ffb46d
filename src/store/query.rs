use std::fmt;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Employees,
    Attendance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Desc,
}

/// Query string for a table endpoint, in the REST dialect of the store:
/// `select=a,b`, `order=col.desc`, `col=eq.value`, `col=not.is.null`, `limit=n`.
///
/// Values are kept raw here and URL-encoded when the request is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &[&str]) -> Self {
        self.pairs.push(("select".into(), columns.join(",")));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.pairs.push((column.into(), format!("eq.{value}")));
        self
    }

    pub fn not_null(mut self, column: &str) -> Self {
        self.pairs.push((column.into(), "not.is.null".into()));
        self
    }

    pub fn order(mut self, column: &str, dir: Direction) -> Self {
        self.pairs.push(("order".into(), format!("{column}.{dir}")));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.pairs.push(("limit".into(), n.to_string()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}
