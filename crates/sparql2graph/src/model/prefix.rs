//! PREFIX declarations and CURIE compaction of IRIs.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Ordered `prefix -> namespace` declarations, as written in the query.
///
/// Declaration order matters: it breaks ties between equally long namespaces
/// during compaction and is preserved when the model is serialized. A prefix
/// declared twice keeps its first position and takes the later namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefixes {
    entries: Vec<(String, String)>,
}

impl Prefixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or redeclare) a prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = namespace,
            None => self.entries.push((prefix, namespace)),
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(prefix, namespace)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Find the declaration whose namespace is the longest string prefix of `iri`.
    ///
    /// Among namespaces of equal length the first declared wins.
    pub fn best_match(&self, iri: &str) -> Option<(&str, &str)> {
        let mut best: Option<(&str, &str)> = None;
        for (prefix, ns) in self.iter() {
            if iri.starts_with(ns) && best.map_or(true, |(_, prev_ns)| ns.len() > prev_ns.len()) {
                best = Some((prefix, ns));
            }
        }
        best
    }

    /// Compact an IRI to `prefix:local` form, or return it unchanged.
    pub fn compact(&self, iri: &str) -> String {
        match self.best_match(iri) {
            Some((prefix, ns)) => format!("{prefix}:{}", &iri[ns.len()..]),
            None => iri.to_string(),
        }
    }

    /// Legend rows `(display, namespace)` sorted by prefix name.
    ///
    /// The display form is `pfx:`, or a bare `:` for the default prefix.
    pub fn legend(&self) -> Vec<(String, String)> {
        let mut rows: Vec<_> = self.entries.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows.into_iter()
            .map(|(prefix, ns)| (format!("{prefix}:"), ns.clone()))
            .collect()
    }
}

impl<P, N> FromIterator<(P, N)> for Prefixes
where
    P: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, N)>>(iter: I) -> Self {
        let mut prefixes = Prefixes::new();
        for (prefix, ns) in iter {
            prefixes.insert(prefix, ns);
        }
        prefixes
    }
}

impl Serialize for Prefixes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, ns) in &self.entries {
            map.serialize_entry(prefix, ns)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Prefixes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PrefixesVisitor;

        impl<'de> Visitor<'de> for PrefixesVisitor {
            type Value = Prefixes;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of prefix names to namespace IRIs")
            }

            /// Entries whose namespace is not a string are skipped.
            fn visit_map<A>(self, mut access: A) -> Result<Prefixes, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut prefixes = Prefixes::new();
                while let Some((prefix, ns)) = access.next_entry::<String, Value>()? {
                    if let Value::String(ns) = ns {
                        prefixes.insert(prefix, ns);
                    }
                }
                Ok(prefixes)
            }

            fn visit_seq<A>(self, mut access: A) -> Result<Prefixes, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while access.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Prefixes::new())
            }

            fn visit_unit<E>(self) -> Result<Prefixes, E>
            where
                E: serde::de::Error,
            {
                Ok(Prefixes::new())
            }

            fn visit_bool<E>(self, _: bool) -> Result<Prefixes, E>
            where
                E: serde::de::Error,
            {
                Ok(Prefixes::new())
            }

            fn visit_i64<E>(self, _: i64) -> Result<Prefixes, E>
            where
                E: serde::de::Error,
            {
                Ok(Prefixes::new())
            }

            fn visit_u64<E>(self, _: u64) -> Result<Prefixes, E>
            where
                E: serde::de::Error,
            {
                Ok(Prefixes::new())
            }

            fn visit_f64<E>(self, _: f64) -> Result<Prefixes, E>
            where
                E: serde::de::Error,
            {
                Ok(Prefixes::new())
            }

            fn visit_str<E>(self, _: &str) -> Result<Prefixes, E>
            where
                E: serde::de::Error,
            {
                Ok(Prefixes::new())
            }
        }

        deserializer.deserialize_any(PrefixesVisitor)
    }
}
