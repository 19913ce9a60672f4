//! Opaque placeholders for regions that later passes must not see.
//!
//! A region is lifted out of the document, stored under a random token, and
//! the token is left in its place. Every pass in between only ever sees the
//! token. At the end of the pipeline [`Placeholders::restore`] swaps each
//! token for the rendered region and empties the table.
//!
//! A table is created per conversion and dropped with it, so tokens from one
//! call can never appear in, or be resolved by, another.

use uuid::Uuid;

const TOKEN_PREFIX: &str = "urnalslot";

/// Token → protected value, in insertion order.
#[derive(Debug)]
pub struct Placeholders<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Placeholders<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Placeholders<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` and return the token that stands in for it.
    ///
    /// `haystack` is the document the token will be inserted into; a token
    /// that already occurs there is thrown away and a new one drawn.
    pub fn insert(&mut self, haystack: &str, value: T) -> String {
        let token = loop {
            let candidate = format!("{TOKEN_PREFIX}{}", Uuid::new_v4().simple());
            if !haystack.contains(&candidate) && !self.contains_token(&candidate) {
                break candidate;
            }
        };
        self.entries.push((token.clone(), value));
        token
    }

    /// Replace every token in `text` with `render(value)`, draining the table.
    pub fn restore(&mut self, text: &str, mut render: impl FnMut(&T) -> String) -> String {
        let mut out = text.to_string();
        for (token, value) in self.entries.drain(..) {
            out = out.replace(&token, &render(&value));
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    fn contains_token(&self, token: &str) -> bool {
        self.entries.iter().any(|(t, _)| t == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_distinct_and_absent_from_haystack() {
        let mut table = Placeholders::new();
        let a = table.insert("hello", 1);
        let b = table.insert("hello", 2);
        assert_ne!(a, b);
        assert!(a.starts_with(TOKEN_PREFIX));
        assert!(!"hello".contains(&a));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn restore_resolves_and_drains() {
        let mut table = Placeholders::new();
        let t = table.insert("", "<x>");
        let doc = format!("before\n{t}\nafter");
        let out = table.restore(&doc, |v| format!("[{v}]"));
        assert_eq!(out, "before\n[<x>]\nafter");
        assert!(table.is_empty());
    }

    #[test]
    fn restore_on_empty_table_is_identity() {
        let mut table: Placeholders<String> = Placeholders::new();
        assert_eq!(table.restore("text", |v| v.clone()), "text");
    }

    #[test]
    fn tables_do_not_share_tokens() {
        let mut first = Placeholders::new();
        let mut second = Placeholders::new();
        let a = first.insert("", ());
        let b = second.insert("", ());
        assert_ne!(a, b);
        // A token from another table is left as plain text.
        assert_eq!(second.restore(&a, |_| "resolved".into()), a);
    }
}
