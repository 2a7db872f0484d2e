//! Relationships between elements.
//!
//! A relationship is a directed, described edge from a source element to
//! a destination element. Relationships are stored as the edges of the
//! model graph and are only created through the model.

use strata_core::{ElementId, InteractionStyle, RelationshipId, TagSet, Taggable};

/// The arguments of a relationship verb such as `uses` or `delivers`.
///
/// A plain description, a `(description, technology)` pair, or a
/// `(description, technology, style)` triple all convert into an
/// `Interaction`; the style defaults to synchronous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    pub description: String,
    pub technology: Option<String>,
    pub style: InteractionStyle,
}

impl Interaction {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            technology: None,
            style: InteractionStyle::Synchronous,
        }
    }

    /// Sets the technology; a blank value clears it.
    pub fn technology(mut self, technology: &str) -> Self {
        self.technology = non_blank(technology);
        self
    }

    pub fn style(mut self, style: InteractionStyle) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Interaction {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for Interaction {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}

impl From<(&str, &str)> for Interaction {
    fn from((description, technology): (&str, &str)) -> Self {
        Self::new(description).technology(technology)
    }
}

impl From<(&str, &str, InteractionStyle)> for Interaction {
    fn from((description, technology, style): (&str, &str, InteractionStyle)) -> Self {
        Self::new(description).technology(technology).style(style)
    }
}

pub(crate) fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A directed relationship between two elements of the same model.
#[derive(Debug, Clone)]
pub struct Relationship {
    id: RelationshipId,
    source: ElementId,
    destination: ElementId,
    description: String,
    technology: Option<String>,
    interaction_style: InteractionStyle,
    tags: TagSet,
}

impl Relationship {
    pub(crate) fn new(
        id: RelationshipId,
        source: ElementId,
        destination: ElementId,
        interaction: Interaction,
    ) -> Self {
        Self {
            id,
            source,
            destination,
            description: interaction.description,
            technology: interaction.technology,
            interaction_style: interaction.style,
            tags: TagSet::new(),
        }
    }

    pub fn id(&self) -> RelationshipId {
        self.id
    }

    pub fn source(&self) -> ElementId {
        self.source
    }

    pub fn destination(&self) -> ElementId {
        self.destination
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn set_technology(&mut self, technology: Option<&str>) {
        self.technology = technology.and_then(non_blank);
    }

    pub fn interaction_style(&self) -> InteractionStyle {
        self.interaction_style
    }

    /// Whether the relationship starts and ends at the same element.
    pub fn is_self_relationship(&self) -> bool {
        self.source == self.destination
    }
}

impl Taggable for Relationship {
    fn required_tags(&self) -> &'static [&'static str] {
        self.interaction_style.required_tags()
    }

    fn tag_set(&self) -> &TagSet {
        &self.tags
    }

    fn tag_set_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }
}
