//! The model: registry and factory for every element and relationship.
//!
//! The model wraps a petgraph `DiGraph` whose nodes are elements and whose
//! edges are relationships, and keeps indexes beside it for O(1) lookup by
//! id and by canonical name. It is the only place that allocates ids.

use crate::element::{Element, ElementRef};
use crate::name_index::NameIndex;
use crate::relationship::{Interaction, Relationship};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use strata_core::{
    CanonicalName, ElementId, ElementKind, Location, ModelError, ModelId, RelationshipId, Result,
};
use tracing::{debug, trace};

/// Outcome of a get-or-create factory call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured {
    /// A new element was registered.
    Created(ElementId),
    /// An element with the same canonical name already existed; the
    /// arguments of the call were discarded.
    Existing(ElementId),
}

impl Ensured {
    pub fn id(self) -> ElementId {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }

    pub fn was_created(self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// The architecture model graph.
///
/// All mutation goes through `&mut Model`, so the borrow checker enforces
/// the single writer during the build phase.
#[derive(Debug)]
pub struct Model {
    id: ModelId,

    /// Elements as nodes, relationships as edges.
    graph: DiGraph<Element, Relationship>,

    /// Next value handed out by `allocate_id`. Shared by elements and relationships.
    next_id: u64,

    /// Maps element id values to graph nodes.
    element_index: HashMap<u64, NodeIndex>,

    /// Maps relationship id values to graph edges.
    relationship_index: HashMap<u64, EdgeIndex>,

    /// Maps canonical names to graph nodes.
    names: NameIndex,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a new empty model.
    pub fn new() -> Self {
        Self {
            id: ModelId::fresh(),
            graph: DiGraph::new(),
            next_id: 1,
            element_index: HashMap::new(),
            relationship_index: HashMap::new(),
            names: NameIndex::new(),
        }
    }

    /// The stamp carried by every handle this model hands out.
    pub fn id(&self) -> ModelId {
        self.id
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ─────────────────────────────────────────────────────────────────────
    // Element factories
    // ─────────────────────────────────────────────────────────────────────

    /// Adds a person unless one with the same name exists already.
    pub fn add_person(
        &mut self,
        location: Location,
        name: &str,
        description: &str,
    ) -> Result<ElementId> {
        self.ensure_person(location, name, description).map(Ensured::id)
    }

    pub fn ensure_person(
        &mut self,
        location: Location,
        name: &str,
        description: &str,
    ) -> Result<Ensured> {
        self.ensure_element(ElementKind::Person, None, name, description, |element| {
            element.set_location(Some(location))
        })
    }

    /// Adds a software system unless one with the same name exists already.
    pub fn add_software_system(
        &mut self,
        location: Location,
        name: &str,
        description: &str,
    ) -> Result<ElementId> {
        self.ensure_software_system(location, name, description).map(Ensured::id)
    }

    pub fn ensure_software_system(
        &mut self,
        location: Location,
        name: &str,
        description: &str,
    ) -> Result<Ensured> {
        self.ensure_element(
            ElementKind::SoftwareSystem,
            None,
            name,
            description,
            |element| element.set_location(Some(location)),
        )
    }

    /// Adds a container to a software system unless the system already
    /// has one with the same name.
    pub fn add_container(
        &mut self,
        software_system: ElementId,
        name: &str,
        description: &str,
        technology: &str,
    ) -> Result<ElementId> {
        self.ensure_container(software_system, name, description, technology)
            .map(Ensured::id)
    }

    pub fn ensure_container(
        &mut self,
        software_system: ElementId,
        name: &str,
        description: &str,
        technology: &str,
    ) -> Result<Ensured> {
        self.ensure_element(
            ElementKind::Container,
            Some(software_system),
            name,
            description,
            |element| element.set_technology(Some(technology)),
        )
    }

    /// Adds a component to a container unless the container already has
    /// one with the same name.
    pub fn add_component(
        &mut self,
        container: ElementId,
        name: &str,
        description: &str,
        technology: &str,
    ) -> Result<ElementId> {
        self.ensure_component(container, name, description, technology)
            .map(Ensured::id)
    }

    pub fn ensure_component(
        &mut self,
        container: ElementId,
        name: &str,
        description: &str,
        technology: &str,
    ) -> Result<Ensured> {
        self.ensure_element(
            ElementKind::Component,
            Some(container),
            name,
            description,
            |element| element.set_technology(Some(technology)),
        )
    }

    fn ensure_element(
        &mut self,
        kind: ElementKind,
        parent: Option<ElementId>,
        name: &str,
        description: &str,
        configure: impl FnOnce(&mut Element),
    ) -> Result<Ensured> {
        let parent_node = self.checked_parent(kind, parent, name)?;
        let canonical = self.canonical_name_for(kind, parent_node, name);

        if let Some(existing) = self.names.resolve(canonical.as_str()) {
            let id = self.graph[existing].id;
            trace!(%id, name = %canonical, "element exists, returning it");
            return Ok(Ensured::Existing(id));
        }

        let value = self.allocate_id();
        let node = self.insert_element(value, kind, parent_node, name, description, canonical);
        configure(&mut self.graph[node]);
        Ok(Ensured::Created(self.graph[node].id))
    }

    /// Re-registers an element under a known id, as read from a document.
    pub(crate) fn restore_element(
        &mut self,
        value: u64,
        kind: ElementKind,
        parent: Option<ElementId>,
        name: &str,
        description: &str,
    ) -> Result<ElementId> {
        let parent_node = self.checked_parent(kind, parent, name)?;
        let canonical = self.canonical_name_for(kind, parent_node, name);
        if self.names.resolve(canonical.as_str()).is_some() {
            return Err(ModelError::DuplicateName(canonical));
        }

        self.next_id = self.next_id.max(value + 1);
        let node = self.insert_element(value, kind, parent_node, name, description, canonical);
        Ok(self.graph[node].id)
    }

    fn insert_element(
        &mut self,
        value: u64,
        kind: ElementKind,
        parent_node: Option<NodeIndex>,
        name: &str,
        description: &str,
        canonical: CanonicalName,
    ) -> NodeIndex {
        let id = ElementId::new(self.id, value);
        let parent = parent_node.map(|node| self.graph[node].id);
        let node = self
            .graph
            .add_node(Element::new(id, kind, name, description, parent));

        self.element_index.insert(value, node);
        self.names.insert(canonical, node);
        if let Some(parent_node) = parent_node {
            self.graph[parent_node].children.push(id);
        }

        debug!(%id, %kind, name, "added element");
        node
    }

    /// Validates the name and the parent of an element about to be created.
    fn checked_parent(
        &self,
        kind: ElementKind,
        parent: Option<ElementId>,
        name: &str,
    ) -> Result<Option<NodeIndex>> {
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName { kind });
        }

        let Some(parent) = parent else {
            return Ok(None);
        };
        let node = self.node(parent)?;
        let found = self.graph[node].kind;
        match kind.parent_kind() {
            Some(expected) if expected == found => Ok(Some(node)),
            expected => Err(ModelError::InvalidParent {
                kind,
                expected: expected.unwrap_or(kind),
                found,
            }),
        }
    }

    /// Renames an element, keeping canonical names unique.
    ///
    /// The canonical names of the element and everything nested in it
    /// are re-indexed.
    pub fn rename(&mut self, id: ElementId, name: &str) -> Result<()> {
        let node = self.node(id)?;
        let kind = self.graph[node].kind;
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName { kind });
        }

        let parent_node = self.graph[node].parent.and_then(|p| self.lookup(p));
        let renamed = self.canonical_name_for(kind, parent_node, name);
        match self.names.resolve(renamed.as_str()) {
            Some(existing) if existing != node => return Err(ModelError::DuplicateName(renamed)),
            _ => {}
        }

        let subtree = self.subtree(node);
        for member in &subtree {
            let old = self.canonical_name_of(&self.graph[*member]);
            self.names.remove(old.as_str());
        }

        let previous = std::mem::replace(&mut self.graph[node].name, name.to_string());

        for member in subtree {
            let new = self.canonical_name_of(&self.graph[member]);
            self.names.insert(new, member);
        }

        debug!(%id, from = %previous, to = name, "renamed element");
        Ok(())
    }

    /// The node and every node nested in it, outermost first.
    fn subtree(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut nodes = vec![node];
        let mut next = 0;
        while next < nodes.len() {
            let children = self.graph[nodes[next]]
                .children
                .iter()
                .filter_map(|child| self.lookup(*child));
            nodes.extend(children);
            next += 1;
        }
        nodes
    }

    // ─────────────────────────────────────────────────────────────────────
    // Relationship verbs
    // ─────────────────────────────────────────────────────────────────────

    /// Adds a relationship saying that `source` uses `destination`.
    ///
    /// The destination may be anything but a person. Returns the new
    /// relationship so tags can be added to it.
    pub fn uses(
        &mut self,
        source: ElementId,
        destination: ElementId,
        interaction: impl Into<Interaction>,
    ) -> Result<&mut Relationship> {
        let (from, to) = (self.kind_of(source)?, self.kind_of(destination)?);
        if to == ElementKind::Person {
            return Err(ModelError::InvalidRelationship {
                verb: "uses",
                from,
                to,
            });
        }
        self.add_relationship(source, destination, interaction)
    }

    /// Adds a relationship saying that `source` delivers something to a person.
    pub fn delivers(
        &mut self,
        source: ElementId,
        destination: ElementId,
        interaction: impl Into<Interaction>,
    ) -> Result<&mut Relationship> {
        let (from, to) = (self.kind_of(source)?, self.kind_of(destination)?);
        if from == ElementKind::Person || to != ElementKind::Person {
            return Err(ModelError::InvalidRelationship {
                verb: "delivers",
                from,
                to,
            });
        }
        self.add_relationship(source, destination, interaction)
    }

    /// Registers a relationship between any two elements of this model.
    ///
    /// The relationship is constructed and registered in one step, so it
    /// can never be registered twice.
    pub fn add_relationship(
        &mut self,
        source: ElementId,
        destination: ElementId,
        interaction: impl Into<Interaction>,
    ) -> Result<&mut Relationship> {
        self.node(source)?;
        self.node(destination)?;
        let value = self.allocate_id();
        self.insert_relationship(value, source, destination, interaction.into())
    }

    /// Re-registers a relationship under a known id, as read from a document.
    pub(crate) fn restore_relationship(
        &mut self,
        value: u64,
        source: ElementId,
        destination: ElementId,
        interaction: Interaction,
    ) -> Result<&mut Relationship> {
        self.next_id = self.next_id.max(value + 1);
        self.insert_relationship(value, source, destination, interaction)
    }

    fn insert_relationship(
        &mut self,
        value: u64,
        source: ElementId,
        destination: ElementId,
        interaction: Interaction,
    ) -> Result<&mut Relationship> {
        let from = self.node(source)?;
        let to = self.node(destination)?;

        let id = RelationshipId::new(self.id, value);
        let edge = self
            .graph
            .add_edge(from, to, Relationship::new(id, source, destination, interaction));
        self.relationship_index.insert(value, edge);

        debug!(%id, %source, %destination, "added relationship");
        Ok(&mut self.graph[edge])
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────

    /// Resolves a handle to its node, rejecting handles of other models.
    fn node(&self, id: ElementId) -> Result<NodeIndex> {
        if id.model() != self.id {
            return Err(ModelError::ForeignElement(id));
        }
        self.element_index
            .get(&id.value())
            .copied()
            .ok_or(ModelError::UnknownElement(id))
    }

    fn lookup(&self, id: ElementId) -> Option<NodeIndex> {
        self.node(id).ok()
    }

    fn kind_of(&self, id: ElementId) -> Result<ElementKind> {
        Ok(self.graph[self.node(id)?].kind)
    }

    /// Gets an element by handle.
    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        let node = self.lookup(id)?;
        Some(ElementRef::new(self, &self.graph[node]))
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let node = self.lookup(id)?;
        self.graph.node_weight_mut(node)
    }

    /// Gets an element by its string id, as used in documents.
    pub fn element_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        let value = id.parse::<u64>().ok()?;
        let node = self.element_index.get(&value)?;
        Some(ElementRef::new(self, &self.graph[*node]))
    }

    /// Gets an element by canonical name.
    pub fn element_by_canonical_name(&self, name: &str) -> Option<ElementRef<'_>> {
        let node = self.names.resolve(name)?;
        Some(ElementRef::new(self, &self.graph[node]))
    }

    pub fn person_with_name(&self, name: &str) -> Option<ElementRef<'_>> {
        self.top_level_with_name(ElementKind::Person, name)
    }

    pub fn software_system_with_name(&self, name: &str) -> Option<ElementRef<'_>> {
        self.top_level_with_name(ElementKind::SoftwareSystem, name)
    }

    /// Canonical names drop `/`, so the plain name is compared as well.
    fn top_level_with_name(&self, kind: ElementKind, name: &str) -> Option<ElementRef<'_>> {
        let canonical = CanonicalName::new(kind, [name]);
        self.element_by_canonical_name(canonical.as_str())
            .filter(|element| element.name() == name)
    }

    /// Finds elements with a given plain name, of any kind.
    ///
    /// This scans the whole model; prefer the canonical-name lookups.
    pub fn find_by_name(&self, name: &str) -> Vec<ElementRef<'_>> {
        self.elements().filter(|e| e.name() == name).collect()
    }

    pub fn canonical_name(&self, id: ElementId) -> Option<CanonicalName> {
        self.element(id).map(|element| element.canonical_name())
    }

    pub(crate) fn canonical_name_of(&self, element: &Element) -> CanonicalName {
        let parent = element.parent.and_then(|p| self.lookup(p));
        self.canonical_name_for(element.kind, parent, &element.name)
    }

    fn canonical_name_for(
        &self,
        kind: ElementKind,
        parent: Option<NodeIndex>,
        name: &str,
    ) -> CanonicalName {
        let mut segments = Vec::new();
        let mut current = parent;
        while let Some(node) = current {
            let ancestor = &self.graph[node];
            segments.push(ancestor.name.as_str());
            current = ancestor.parent.and_then(|p| self.lookup(p));
        }
        segments.reverse();
        segments.push(name);
        CanonicalName::new(kind, segments)
    }

    /// Whether an id value is taken by an element or a relationship.
    pub(crate) fn is_id_taken(&self, value: u64) -> bool {
        self.element_index.contains_key(&value) || self.relationship_index.contains_key(&value)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Enumeration
    // ─────────────────────────────────────────────────────────────────────

    /// Iterates over all elements in creation order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.graph
            .node_weights()
            .map(move |element| ElementRef::new(self, element))
    }

    pub fn people(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.elements_of_kind(ElementKind::Person)
    }

    pub fn software_systems(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.elements_of_kind(ElementKind::SoftwareSystem)
    }

    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = ElementRef<'_>> {
        self.elements().filter(move |element| element.kind() == kind)
    }

    /// Iterates over all relationships in creation order.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.graph.edge_weights()
    }

    pub fn relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        if id.model() != self.id {
            return None;
        }
        let edge = self.relationship_index.get(&id.value())?;
        self.graph.edge_weight(*edge)
    }

    pub fn relationship_mut(&mut self, id: RelationshipId) -> Option<&mut Relationship> {
        if id.model() != self.id {
            return None;
        }
        let edge = self.relationship_index.get(&id.value())?;
        self.graph.edge_weight_mut(*edge)
    }

    /// Gets a relationship by its string id, as used in documents.
    pub fn relationship_by_id(&self, id: &str) -> Option<&Relationship> {
        let value = id.parse::<u64>().ok()?;
        let edge = self.relationship_index.get(&value)?;
        self.graph.edge_weight(*edge)
    }

    /// Relationships starting at an element, oldest first.
    pub fn efferent_relationships(&self, id: ElementId) -> Vec<&Relationship> {
        self.relationships_directed(id, Direction::Outgoing)
    }

    /// Relationships ending at an element, oldest first.
    pub fn afferent_relationships(&self, id: ElementId) -> Vec<&Relationship> {
        self.relationships_directed(id, Direction::Incoming)
    }

    fn relationships_directed(&self, id: ElementId, direction: Direction) -> Vec<&Relationship> {
        let Some(node) = self.lookup(id) else {
            return Vec::new();
        };
        let mut relationships: Vec<&Relationship> = self
            .graph
            .edges_directed(node, direction)
            .map(|edge| edge.weight())
            .collect();
        relationships.sort_by_key(|r| r.id().value());
        relationships
    }

    /// The oldest relationship from `source` to `destination`, if any.
    pub fn efferent_relationship_between(
        &self,
        source: ElementId,
        destination: ElementId,
    ) -> Option<&Relationship> {
        let from = self.lookup(source)?;
        let to = self.lookup(destination)?;
        self.graph
            .edges_connecting(from, to)
            .map(|edge| edge.weight())
            .min_by_key(|r| r.id().value())
    }

    pub(crate) fn graph(&self) -> &DiGraph<Element, Relationship> {
        &self.graph
    }

    pub(crate) fn node_of(&self, id: ElementId) -> Option<NodeIndex> {
        self.lookup(id)
    }

    /// Returns the number of elements.
    pub fn element_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Model statistics for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelStats {
    pub people: usize,
    pub software_systems: usize,
    pub containers: usize,
    pub components: usize,
    pub relationships: usize,
}

impl Model {
    /// Returns model statistics.
    pub fn stats(&self) -> ModelStats {
        let mut stats = ModelStats {
            relationships: self.relationship_count(),
            ..ModelStats::default()
        };
        for element in self.graph.node_weights() {
            match element.kind {
                ElementKind::Person => stats.people += 1,
                ElementKind::SoftwareSystem => stats.software_systems += 1,
                ElementKind::Container => stats.containers += 1,
                ElementKind::Component => stats.components += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{InteractionStyle, Taggable};

    #[test]
    fn test_add_software_system_twice_returns_the_same_element() {
        let mut model = Model::new();
        let first = model
            .ensure_software_system(Location::Internal, "X", "d1")
            .unwrap();
        let second = model
            .ensure_software_system(Location::External, "X", "d2")
            .unwrap();

        assert!(first.was_created());
        assert_eq!(second, Ensured::Existing(first.id()));
        assert_eq!(model.element_count(), 1);

        let system = model.element(first.id()).unwrap();
        assert_eq!(system.description(), "d1");
        assert_eq!(system.location(), Location::Internal);
    }

    #[test]
    fn test_person_and_system_may_share_a_name() {
        let mut model = Model::new();
        let person = model.add_person(Location::Internal, "Ops", "").unwrap();
        let system = model.add_software_system(Location::Internal, "Ops", "").unwrap();
        assert_ne!(person, system);
        assert_eq!(model.person_with_name("Ops").unwrap().id(), person);
        assert_eq!(model.software_system_with_name("Ops").unwrap().id(), system);
    }

    #[test]
    fn test_containers_are_scoped_by_their_system() {
        let mut model = Model::new();
        let a = model.add_software_system(Location::Internal, "A", "").unwrap();
        let b = model.add_software_system(Location::Internal, "B", "").unwrap();

        let web_a = model.add_container(a, "Web", "", "").unwrap();
        let web_b = model.add_container(b, "Web", "", "").unwrap();
        let web_a_again = model.add_container(a, "Web", "other", "Go").unwrap();

        assert_ne!(web_a, web_b);
        assert_eq!(web_a, web_a_again);
        assert_eq!(model.element(a).unwrap().containers().len(), 1);
        assert_eq!(model.element(web_a).unwrap().technology(), None);
    }

    #[test]
    fn test_ids_are_monotonic_and_shared_with_relationships() {
        let mut model = Model::new();
        let a = model.add_person(Location::Internal, "A", "").unwrap();
        let b = model.add_software_system(Location::Internal, "B", "").unwrap();
        let rel = model.uses(a, b, "Uses").unwrap().id();
        let c = model.add_software_system(Location::Internal, "C", "").unwrap();

        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 2);
        assert_eq!(rel.value(), 3);
        assert_eq!(c.value(), 4);
        assert_eq!(model.element_by_id("2").unwrap().id(), b);
        assert_eq!(model.relationship_by_id("3").unwrap().id(), rel);
        assert!(model.element_by_id("3").is_none());
        assert!(model.element_by_id("abc").is_none());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut model = Model::new();
        let err = model.add_person(Location::Internal, "  ", "").unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyName {
                kind: ElementKind::Person
            }
        );
        assert_eq!(model.element_count(), 0);
    }

    #[test]
    fn test_wrong_parent_kind_is_rejected() {
        let mut model = Model::new();
        let person = model.add_person(Location::Internal, "User", "").unwrap();
        let err = model.add_container(person, "Web", "", "").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidParent {
                kind: ElementKind::Container,
                expected: ElementKind::SoftwareSystem,
                found: ElementKind::Person,
            }
        );

        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        assert!(matches!(
            model.add_component(system, "C", "", ""),
            Err(ModelError::InvalidParent { .. })
        ));
    }

    #[test]
    fn test_handles_from_another_model_are_rejected() {
        let mut first = Model::new();
        let mut second = Model::new();
        let a = first.add_software_system(Location::Internal, "A", "").unwrap();
        let b = second.add_software_system(Location::Internal, "B", "").unwrap();

        assert_eq!(
            first.uses(a, b, "Uses").unwrap_err(),
            ModelError::ForeignElement(b)
        );
        assert!(matches!(
            second.add_container(a, "Web", "", ""),
            Err(ModelError::ForeignElement(_))
        ));
        assert!(first.element(b).is_none());
        assert_eq!(first.relationship_count(), 0);
    }

    #[test]
    fn test_rejected_relationship_leaves_ids_untouched() {
        let mut first = Model::new();
        let other = Model::new().id();
        let a = first.add_software_system(Location::Internal, "A", "").unwrap();
        let foreign = ElementId::new(other, 1);
        let missing = ElementId::new(first.id(), 99);

        assert!(first.add_relationship(a, foreign, "Uses").is_err());
        assert!(first.add_relationship(missing, a, "Uses").is_err());

        let b = first.add_software_system(Location::Internal, "B", "").unwrap();
        assert_eq!(b.value(), 2);
    }

    #[test]
    fn test_named_lookups_compare_plain_names() {
        let mut model = Model::new();
        model.add_person(Location::Internal, "A/B", "").unwrap();
        model
            .add_software_system(Location::Internal, "In/Out", "")
            .unwrap();

        assert_eq!(model.person_with_name("A/B").unwrap().name(), "A/B");
        assert!(model.person_with_name("AB").is_none());
        assert!(model.software_system_with_name("In/Out").is_some());
        assert!(model.software_system_with_name("InOut").is_none());
    }

    #[test]
    fn test_uses_and_directionality() {
        let mut model = Model::new();
        let a = model.add_software_system(Location::Internal, "A", "").unwrap();
        let b = model.add_software_system(Location::Internal, "B", "").unwrap();
        model.uses(a, b, "x").unwrap();

        let a_ref = model.element(a).unwrap();
        let b_ref = model.element(b).unwrap();
        assert!(a_ref.has_efferent_relationship_with(b));
        assert!(!b_ref.has_efferent_relationship_with(a));

        let rel = a_ref.efferent_relationship_with(b).unwrap();
        assert_eq!(rel.source(), a);
        assert_eq!(rel.destination(), b);
        assert_eq!(rel.description(), "x");

        assert_eq!(model.afferent_relationships(b).len(), 1);
        assert!(model.afferent_relationships(a).is_empty());
    }

    #[test]
    fn test_none_is_never_related() {
        let mut model = Model::new();
        let a = model.add_software_system(Location::Internal, "A", "").unwrap();
        let a_ref = model.element(a).unwrap();
        assert!(!a_ref.has_efferent_relationship_with(None));
        assert!(a_ref.efferent_relationship_with(None).is_none());
    }

    #[test]
    fn test_self_relationship_only_when_created() {
        let mut model = Model::new();
        let a = model.add_software_system(Location::Internal, "A", "").unwrap();

        assert!(!model.element(a).unwrap().has_efferent_relationship_with(a));
        assert!(model.element(a).unwrap().efferent_relationship_with(a).is_none());

        model.uses(a, a, "x").unwrap();

        let a_ref = model.element(a).unwrap();
        assert!(a_ref.has_efferent_relationship_with(a));
        let rel = a_ref.efferent_relationship_with(a).unwrap();
        assert_eq!(rel.source(), a);
        assert_eq!(rel.destination(), a);
        assert_eq!(rel.description(), "x");
        assert!(rel.is_self_relationship());
    }

    #[test]
    fn test_uses_chains_tags() {
        let mut model = Model::new();
        let risk = model.add_software_system(Location::Internal, "Risk", "").unwrap();
        let monitoring = model
            .add_software_system(Location::Internal, "Monitoring", "")
            .unwrap();

        model
            .uses(
                risk,
                monitoring,
                ("Sends critical failure alerts to", "SNMP", InteractionStyle::Asynchronous),
            )
            .unwrap()
            .add_tags(["Alert"]);

        let rel = model.relationships().next().unwrap();
        assert_eq!(rel.tags(), "Relationship,Asynchronous,Alert");
        assert_eq!(rel.technology(), Some("SNMP"));
    }

    #[test]
    fn test_verb_endpoint_rules() {
        let mut model = Model::new();
        let user = model.add_person(Location::Internal, "User", "").unwrap();
        let mail = model.add_software_system(Location::Internal, "Mail", "").unwrap();

        assert!(matches!(
            model.uses(mail, user, "Notifies"),
            Err(ModelError::InvalidRelationship { verb: "uses", .. })
        ));
        assert!(matches!(
            model.delivers(user, user, "Talks to"),
            Err(ModelError::InvalidRelationship { verb: "delivers", .. })
        ));

        let rel = model
            .delivers(mail, user, ("Sends e-mail to", "SMTP", InteractionStyle::Asynchronous))
            .unwrap();
        assert_eq!(rel.destination(), user);
        assert_eq!(model.relationship_count(), 1);
    }

    #[test]
    fn test_equal_across_models_by_canonical_name() {
        let mut first = Model::new();
        let mut second = Model::new();
        second.add_person(Location::Internal, "Padding", "").unwrap();

        let a = first.add_software_system(Location::Internal, "SystemA", "").unwrap();
        let b = second
            .add_software_system(Location::External, "SystemA", "other")
            .unwrap();

        assert_ne!(a.value(), b.value());
        let a = first.element(a).unwrap();
        let b = second.element(b).unwrap();
        assert!(a.is_same_as(&b));
        assert!(b.is_same_as(&a));
        assert!(a.is_same_as(&a));
    }

    #[test]
    fn test_rename_reindexes_nested_elements() {
        let mut model = Model::new();
        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        let web = model.add_container(system, "Web", "", "").unwrap();

        model.rename(system, "T").unwrap();

        assert_eq!(
            model.canonical_name(web).unwrap().as_str(),
            "Container://T/Web"
        );
        assert!(model.element_by_canonical_name("Container://S/Web").is_none());
        assert_eq!(
            model.element_by_canonical_name("Container://T/Web").unwrap().id(),
            web
        );
        assert!(model.software_system_with_name("S").is_none());

        let again = model.add_container(system, "Web", "", "").unwrap();
        assert_eq!(again, web);
    }

    #[test]
    fn test_rename_rejects_collisions() {
        let mut model = Model::new();
        let a = model.add_software_system(Location::Internal, "A", "").unwrap();
        model.add_software_system(Location::Internal, "B", "").unwrap();

        let err = model.rename(a, "B").unwrap_err();
        assert!(matches!(err, ModelError::DuplicateName(_)));
        assert_eq!(model.element(a).unwrap().name(), "A");

        model.rename(a, "A").unwrap();
        assert_eq!(model.software_system_with_name("A").unwrap().id(), a);
    }

    #[test]
    fn test_stats() {
        let mut model = Model::new();
        let user = model.add_person(Location::Internal, "User", "").unwrap();
        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        let web = model.add_container(system, "Web", "", "").unwrap();
        model.add_component(web, "Router", "", "").unwrap();
        model.uses(user, web, "Uses").unwrap();

        assert_eq!(
            model.stats(),
            ModelStats {
                people: 1,
                software_systems: 1,
                containers: 1,
                components: 1,
                relationships: 1,
            }
        );
    }
}
