use core::ops::{Deref, DerefMut};

/// A single member of an [`Object`].
///
/// Both fields are exact byte spans of the source text: the key keeps its
/// surrounding quote characters and is never unescaped, and the value is the
/// raw token text of whatever followed the `:`, left fully uninterpreted.
/// A value span may itself be a nested object, in which case it can be fed
/// back through [`decode::parse`](crate::decode::parse) to go one level
/// deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub key: &'a [u8],
    pub value: &'a [u8],
}

/// A JSON object as an ordered sequence of members.
///
/// Members appear in their original left-to-right source order, and duplicate
/// keys are kept as separate entries.  The inner `Vec` is exposed via
/// `Deref`/`DerefMut`, so entries can be inspected, appended, removed or
/// reordered before re-encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object<'a>(pub Vec<Entry<'a>>);

impl<'a> Object<'a> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<'a> Deref for Object<'a> {
    type Target = Vec<Entry<'a>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Object<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for Object<'a> {
    type Item = Entry<'a>;
    type IntoIter = std::vec::IntoIter<Entry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Object<'a> {
    type Item = &'b Entry<'a>;
    type IntoIter = core::slice::Iter<'b, Entry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<Entry<'a>> for Object<'a> {
    fn from_iter<I: IntoIterator<Item = Entry<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
