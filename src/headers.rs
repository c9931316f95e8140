use indexmap::IndexMap;

/// Ordered header map with case-insensitive names.
///
/// Names keep the casing of their first write; `set` on an existing name
/// overwrites the value in place without reordering. Iteration order is
/// insertion order, which keeps emitted responses deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderCollection {
    headers: IndexMap<String, String>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if let Some(existing) = self.position(&name) {
            self.headers[existing] = value.into();
        } else {
            self.headers.insert(name, value.into());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .map(|index| self.headers[index].as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Layer `other` on top of this collection; its values win on conflict.
    pub fn extend(&mut self, other: &HeaderCollection) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.headers
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
