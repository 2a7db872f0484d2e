//! Elements of the model graph.
//!
//! An [`Element`] holds the data of one person, software system, container
//! or component. Anything that needs the rest of the graph (ancestry,
//! canonical name, relationships) lives on [`ElementRef`], a read view that
//! pairs an element with the model that owns it.

use crate::model::Model;
use crate::relationship::{non_blank, Relationship};
use std::fmt;
use std::ops::Deref;
use strata_core::{CanonicalName, ElementId, ElementKind, Location, TagSet, Taggable};

/// A node in the model graph.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: ElementKind,
    pub(crate) name: String,
    description: String,
    technology: Option<String>,
    location: Location,
    /// Owning element; a handle into the model, never an owning pointer.
    pub(crate) parent: Option<ElementId>,
    /// Containers of a software system or components of a container.
    pub(crate) children: Vec<ElementId>,
    tags: TagSet,
}

impl Element {
    pub(crate) fn new(
        id: ElementId,
        kind: ElementKind,
        name: &str,
        description: &str,
        parent: Option<ElementId>,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.to_string(),
            description: description.to_string(),
            technology: None,
            location: Location::Unspecified,
            parent,
            children: Vec::new(),
            tags: TagSet::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The element's name. Use [`Model::rename`] to change it.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Implementation technology of a container or component.
    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn set_technology(&mut self, technology: Option<&str>) {
        self.technology = technology.and_then(non_blank);
    }

    /// Where a person or software system sits relative to the scope of analysis.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Sets the location; `None` resets it to [`Location::Unspecified`].
    pub fn set_location(&mut self, location: Option<Location>) {
        self.location = location.unwrap_or_default();
    }

    pub fn parent_id(&self) -> Option<ElementId> {
        self.parent
    }

    /// Handles of the directly contained elements, in creation order.
    pub fn child_ids(&self) -> &[ElementId] {
        &self.children
    }
}

impl Taggable for Element {
    fn required_tags(&self) -> &'static [&'static str] {
        self.kind.required_tags()
    }

    fn tag_set(&self) -> &TagSet {
        &self.tags
    }

    fn tag_set_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }
}

/// Read view of an element together with its model.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    model: &'a Model,
    element: &'a Element,
}

impl<'a> ElementRef<'a> {
    pub(crate) fn new(model: &'a Model, element: &'a Element) -> Self {
        Self { model, element }
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// Computed from the current names of the element and its ancestors.
    pub fn canonical_name(&self) -> CanonicalName {
        self.model.canonical_name_of(self.element)
    }

    /// Whether both elements describe the same real-world thing.
    ///
    /// Compares canonical names, so elements from different models can
    /// match. Handle equality (`==` on ids) is identity within one model.
    pub fn is_same_as(&self, other: &ElementRef<'_>) -> bool {
        self.element.kind == other.element.kind && self.canonical_name() == other.canonical_name()
    }

    pub fn parent(&self) -> Option<ElementRef<'a>> {
        self.element.parent.and_then(|id| self.model.element(id))
    }

    pub fn children(&self) -> Vec<ElementRef<'a>> {
        self.element
            .children
            .iter()
            .filter_map(|id| self.model.element(*id))
            .collect()
    }

    /// Containers of a software system.
    pub fn containers(&self) -> Vec<ElementRef<'a>> {
        self.children_of_kind(ElementKind::Container)
    }

    /// Components of a container.
    pub fn components(&self) -> Vec<ElementRef<'a>> {
        self.children_of_kind(ElementKind::Component)
    }

    pub fn container_with_name(&self, name: &str) -> Option<ElementRef<'a>> {
        self.containers().into_iter().find(|c| c.name() == name)
    }

    pub fn container_with_id(&self, id: &str) -> Option<ElementRef<'a>> {
        self.containers()
            .into_iter()
            .find(|c| c.id().to_string() == id)
    }

    pub fn component_with_name(&self, name: &str) -> Option<ElementRef<'a>> {
        self.components().into_iter().find(|c| c.name() == name)
    }

    pub fn component_with_id(&self, id: &str) -> Option<ElementRef<'a>> {
        self.components()
            .into_iter()
            .find(|c| c.id().to_string() == id)
    }

    /// Outgoing relationships, oldest first. The vector is a fresh copy.
    pub fn relationships(&self) -> Vec<&'a Relationship> {
        self.model.efferent_relationships(self.element.id)
    }

    /// Whether this element has a relationship to `other`.
    ///
    /// `None` yields false. The element itself only counts when an explicit
    /// self-relationship exists.
    pub fn has_efferent_relationship_with(&self, other: impl Into<Option<ElementId>>) -> bool {
        self.efferent_relationship_with(other).is_some()
    }

    /// The first relationship from this element to `other`, if any.
    pub fn efferent_relationship_with(
        &self,
        other: impl Into<Option<ElementId>>,
    ) -> Option<&'a Relationship> {
        self.model
            .efferent_relationship_between(self.element.id, other.into()?)
    }

    fn children_of_kind(&self, kind: ElementKind) -> Vec<ElementRef<'a>> {
        self.children()
            .into_iter()
            .filter(|child| child.kind() == kind)
            .collect()
    }
}

impl Deref for ElementRef<'_> {
    type Target = Element;

    fn deref(&self) -> &Element {
        self.element
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.element.id)
            .field("kind", &self.element.kind)
            .field("name", &self.element.name)
            .finish()
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element.id == other.element.id
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Model;
    use strata_core::{ElementKind, Location, Taggable};

    #[test]
    fn test_tags_when_there_are_no_tags() {
        let mut model = Model::new();
        let id = model
            .add_software_system(Location::Internal, "Name", "Description")
            .unwrap();
        assert_eq!(model.element(id).unwrap().tags(), "Element,Software System");
    }

    #[test]
    fn test_tags_with_user_tags() {
        let mut model = Model::new();
        let id = model
            .add_software_system(Location::Internal, "Name", "Description")
            .unwrap();
        let element = model.element_mut(id).unwrap();
        element.add_tags(["tag1", "tag2", "tag3"]);
        assert_eq!(element.tags(), "Element,Software System,tag1,tag2,tag3");

        element.set_tags(None);
        assert_eq!(element.tags(), "Element,Software System,tag1,tag2,tag3");
    }

    #[test]
    fn test_required_tags_per_kind() {
        let mut model = Model::new();
        let person = model.add_person(Location::External, "User", "").unwrap();
        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        let container = model.add_container(system, "Web App", "", "Rust").unwrap();
        let component = model.add_component(container, "Router", "", "").unwrap();

        assert_eq!(model.element(person).unwrap().tags(), "Element,Person");
        assert_eq!(model.element(container).unwrap().tags(), "Element,Container");
        assert_eq!(model.element(component).unwrap().tags(), "Element,Component");
    }

    #[test]
    fn test_set_location_none_resets_to_unspecified() {
        let mut model = Model::new();
        let id = model.add_person(Location::Internal, "User", "").unwrap();
        let person = model.element_mut(id).unwrap();
        assert_eq!(person.location(), Location::Internal);
        person.set_location(None);
        assert_eq!(person.location(), Location::Unspecified);
    }

    #[test]
    fn test_container_lookup_by_name_and_id() {
        let mut model = Model::new();
        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        let web = model.add_container(system, "Web App", "", "Rust").unwrap();

        let system = model.element(system).unwrap();
        let found = system.container_with_name("Web App").unwrap();
        assert_eq!(found.id(), web);
        assert_eq!(found.kind(), ElementKind::Container);
        assert_eq!(found.technology(), Some("Rust"));
        assert!(system.container_with_name("nope").is_none());
        assert_eq!(system.container_with_id(&web.to_string()).unwrap().id(), web);
        assert!(system.container_with_id("999").is_none());
    }

    #[test]
    fn test_canonical_name_includes_ancestry() {
        let mut model = Model::new();
        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        let web = model.add_container(system, "Web App", "", "").unwrap();
        let router = model.add_component(web, "Router", "", "").unwrap();

        let web = model.element(web).unwrap();
        assert_eq!(web.canonical_name().as_str(), "Container://S/Web App");
        assert_eq!(web.parent().unwrap().id(), system);
        assert_eq!(
            model.element(router).unwrap().canonical_name().as_str(),
            "Component://S/Web App/Router"
        );
        assert!(model.element(system).unwrap().parent().is_none());
    }

    #[test]
    fn test_relationships_are_a_copy() {
        let mut model = Model::new();
        let a = model.add_software_system(Location::Internal, "A", "").unwrap();
        let b = model.add_software_system(Location::Internal, "B", "").unwrap();
        model.uses(a, b, "Calls").unwrap();

        let mut relationships = model.element(a).unwrap().relationships();
        relationships.clear();
        assert_eq!(model.element(a).unwrap().relationships().len(), 1);
    }
}
