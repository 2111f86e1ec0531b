//! Parameter Set
//!
//! The structured request built before encoding: up to three named
//! groups (`fields`, `expr`, `settings`) of name/value entries.

/// Group tag for values read from page elements
pub const FIELDS: &str = "fields";
/// Group tag for literal key=value expressions
pub const EXPR: &str = "expr";
/// Group tag for session settings
pub const SETTINGS: &str = "settings";

/// Ordered name/value mapping. Re-inserting a name overwrites the value
/// in place and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    entries: Vec<(String, String)>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Same entries regardless of order
    pub fn same_entries(&self, other: &Group) -> bool {
        self.len() == other.len() && self.iter().all(|(n, v)| other.get(n) == Some(v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Group {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut group = Group::new();
        for (k, v) in iter {
            group.insert(k, v);
        }
        group
    }
}

/// Full request payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pub fields: Option<Group>,
    pub expr: Option<Group>,
    pub settings: Group,
}

impl ParameterSet {
    /// Build a set, leaving out empty `fields` / `expr` groups.
    /// `settings` is always present.
    pub fn assemble(fields: Group, expr: Group, settings: Group) -> Self {
        Self {
            fields: (!fields.is_empty()).then_some(fields),
            expr: (!expr.is_empty()).then_some(expr),
            settings,
        }
    }

    /// Present groups with their tag names, in wire order
    pub fn groups(&self) -> impl Iterator<Item = (&'static str, &Group)> {
        [
            (FIELDS, self.fields.as_ref()),
            (EXPR, self.expr.as_ref()),
            (SETTINGS, Some(&self.settings)),
        ]
        .into_iter()
        .filter_map(|(tag, group)| group.map(|g| (tag, g)))
    }

    /// Same groups with the same entries, ignoring entry order
    pub fn same_mapping(&self, other: &ParameterSet) -> bool {
        fn opt_eq(a: Option<&Group>, b: Option<&Group>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a.same_entries(b),
                (None, None) => true,
                _ => false,
            }
        }
        opt_eq(self.fields.as_ref(), other.fields.as_ref())
            && opt_eq(self.expr.as_ref(), other.expr.as_ref())
            && self.settings.same_entries(&other.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_overwrite_keeps_position() {
        let mut group = Group::new();
        group.insert("a", "1");
        group.insert("b", "2");
        group.insert("a", "3");

        assert_eq!(group.len(), 2);
        assert_eq!(group.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_assemble_omits_empty_groups() {
        let settings: Group = [("session_id", "x")].into_iter().collect();
        let set = ParameterSet::assemble(Group::new(), Group::new(), settings);

        assert!(set.fields.is_none());
        assert!(set.expr.is_none());
        assert_eq!(set.groups().map(|(t, _)| t).collect::<Vec<_>>(), vec![SETTINGS]);
    }

    #[test]
    fn test_groups_wire_order() {
        let set = ParameterSet::assemble(
            [("user", "bob")].into_iter().collect(),
            [("action", "commit")].into_iter().collect(),
            Group::new(),
        );
        let tags: Vec<_> = set.groups().map(|(t, _)| t).collect();
        assert_eq!(tags, vec![FIELDS, EXPR, SETTINGS]);
    }

    #[test]
    fn test_same_mapping_ignores_order() {
        let a: Group = [("x", "1"), ("y", "2")].into_iter().collect();
        let b: Group = [("y", "2"), ("x", "1")].into_iter().collect();
        assert!(a.same_entries(&b));
        assert_ne!(a, b);

        let set_a = ParameterSet::assemble(a, Group::new(), Group::new());
        let set_b = ParameterSet::assemble(b, Group::new(), Group::new());
        assert!(set_a.same_mapping(&set_b));
    }
}
