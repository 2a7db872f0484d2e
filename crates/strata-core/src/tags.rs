//! Tags attached to elements and relationships.
//!
//! Tags are free-form strings used by the view layer to style and filter.
//! Every taggable item also carries a fixed set of required tags that
//! depend on what it is; those always come first and cannot be removed.

pub const ELEMENT: &str = "Element";
pub const PERSON: &str = "Person";
pub const SOFTWARE_SYSTEM: &str = "Software System";
pub const CONTAINER: &str = "Container";
pub const COMPONENT: &str = "Component";
pub const RELATIONSHIP: &str = "Relationship";
pub const SYNCHRONOUS: &str = "Synchronous";
pub const ASYNCHRONOUS: &str = "Asynchronous";

/// Separator used when tags are rendered as a single string.
pub const TAG_SEPARATOR: char = ',';

/// Something that can be offered as a tag.
///
/// Absent (`None`) and blank values yield no tag.
pub trait IntoTag {
    fn into_tag(self) -> Option<String>;
}

impl IntoTag for &str {
    fn into_tag(self) -> Option<String> {
        let tag = self.trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }
}

impl IntoTag for String {
    fn into_tag(self) -> Option<String> {
        self.as_str().into_tag()
    }
}

impl IntoTag for &String {
    fn into_tag(self) -> Option<String> {
        self.as_str().into_tag()
    }
}

impl<T: IntoTag> IntoTag for Option<T> {
    fn into_tag(self) -> Option<String> {
        self.and_then(IntoTag::into_tag)
    }
}

/// User-added tags in first-insertion order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tag unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, tag: String) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

/// Shared tagging behaviour for elements and relationships.
///
/// Implementors only say which tags are required and where their user
/// tags live; ordering, de-duplication and the no-op handling of absent
/// input are provided here.
pub trait Taggable {
    /// Tags this item always carries, in fixed order.
    fn required_tags(&self) -> &'static [&'static str];

    fn tag_set(&self) -> &TagSet;

    fn tag_set_mut(&mut self) -> &mut TagSet;

    /// Required tags followed by user tags.
    fn tag_list(&self) -> Vec<&str> {
        self.required_tags()
            .iter()
            .copied()
            .chain(self.tag_set().iter())
            .collect()
    }

    /// All tags joined with commas, e.g. `"Element,Software System,tag1"`.
    fn tags(&self) -> String {
        self.tag_list().join(",")
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.required_tags().contains(&tag) || self.tag_set().contains(tag)
    }

    /// Appends each present, not yet carried tag in the order given.
    ///
    /// An item holding separators is split, so the tags always match
    /// their comma-joined form.
    fn add_tags<I>(&mut self, tags: I)
    where
        I: IntoIterator,
        I::Item: IntoTag,
        Self: Sized,
    {
        let required = self.required_tags();
        for tag in tags.into_iter().filter_map(IntoTag::into_tag) {
            for part in tag.split(TAG_SEPARATOR).map(str::trim) {
                if !part.is_empty() && !required.contains(&part) {
                    self.tag_set_mut().insert(part.to_string());
                }
            }
        }
    }

    /// Replaces the user tags with a comma-separated list.
    ///
    /// `None` or a blank list leaves the current tags untouched.
    fn set_tags(&mut self, tags: Option<&str>)
    where
        Self: Sized,
    {
        let Some(tags) = tags.filter(|t| !t.trim().is_empty()) else {
            return;
        };
        self.tag_set_mut().clear();
        self.add_tags(tags.split(TAG_SEPARATOR));
    }
}
