//! Rebuilding a model from its document form.
//!
//! The importer handles the two-pass process:
//! 1. Add all elements, keeping their ids (parents precede children)
//! 2. Resolve relationship endpoints by id into graph edges

use crate::document::{DocumentError, ElementDocument, ModelDocument, RelationshipDocument};
use crate::model::Model;
use crate::relationship::Interaction;
use std::collections::HashMap;
use strata_core::{ElementId, Taggable};
use tracing::info;

/// Builds a Model from documented elements and relationships.
pub struct ModelImporter {
    model: Model,
    /// Maps numeric document ids to handles for endpoint resolution.
    ids: HashMap<u64, ElementId>,
}

impl Default for ModelImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelImporter {
    /// Creates a new importer.
    pub fn new() -> Self {
        Self {
            model: Model::new(),
            ids: HashMap::new(),
        }
    }

    /// Adds elements to the model.
    ///
    /// Call this with every element before calling `add_relationships`.
    pub fn add_elements(&mut self, elements: Vec<ElementDocument>) -> Result<(), DocumentError> {
        for element in elements {
            let value = self.claim_id(&element.id)?;

            let parent = match (element.kind.parent_kind(), &element.parent_id) {
                (None, None) => None,
                (None, Some(_)) => {
                    return Err(DocumentError::UnexpectedParent {
                        element: element.id,
                        kind: element.kind,
                    })
                }
                (Some(_), None) => {
                    return Err(DocumentError::MissingParent {
                        element: element.id,
                        kind: element.kind,
                    })
                }
                (Some(_), Some(parent_id)) => match self.lookup(parent_id) {
                    Some(parent) => Some(parent),
                    None => {
                        return Err(DocumentError::UnknownParent {
                            element: element.id.clone(),
                            parent: parent_id.clone(),
                        })
                    }
                },
            };

            let id = self.model.restore_element(
                value,
                element.kind,
                parent,
                &element.name,
                &element.description,
            )?;

            if let Some(restored) = self.model.element_mut(id) {
                restored.set_technology(element.technology.as_deref());
                restored.set_location(Some(element.location));
                restored.set_tags(Some(element.tags.as_str()));
            }
            self.ids.insert(value, id);
        }
        Ok(())
    }

    /// Resolves relationship endpoints and adds the relationships.
    ///
    /// This is the second pass, after all elements are added.
    pub fn add_relationships(
        &mut self,
        relationships: Vec<RelationshipDocument>,
    ) -> Result<(), DocumentError> {
        for relationship in relationships {
            let value = self.claim_id(&relationship.id)?;
            let source = self.resolve(&relationship.id, &relationship.source_id)?;
            let destination = self.resolve(&relationship.id, &relationship.destination_id)?;

            let interaction = Interaction {
                description: relationship.description,
                technology: relationship.technology,
                style: relationship.interaction_style,
            };
            self.model
                .restore_relationship(value, source, destination, interaction)?
                .set_tags(Some(relationship.tags.as_str()));
        }
        Ok(())
    }

    /// Finishes importing and returns the model.
    pub fn finish(self) -> Model {
        self.model
    }

    /// Parses a document id. The largest `u64` is refused so the id
    /// counter can always move past every imported id.
    fn claim_id(&self, id: &str) -> Result<u64, DocumentError> {
        let value = id
            .parse::<u64>()
            .ok()
            .filter(|value| value.checked_add(1).is_some())
            .ok_or_else(|| DocumentError::InvalidId(id.to_string()))?;
        if self.model.is_id_taken(value) {
            return Err(DocumentError::DuplicateId(id.to_string()));
        }
        Ok(value)
    }

    /// Finds an imported element by document id, in any numeric spelling.
    fn lookup(&self, id: &str) -> Option<ElementId> {
        let value = id.parse::<u64>().ok()?;
        self.ids.get(&value).copied()
    }

    fn resolve(&self, relationship: &str, element: &str) -> Result<ElementId, DocumentError> {
        self.lookup(element)
            .ok_or_else(|| DocumentError::UnknownElement {
                relationship: relationship.to_string(),
                element: element.to_string(),
            })
    }
}

impl Model {
    /// Rebuilds a model from its document form, keeping every id.
    pub fn from_document(document: ModelDocument) -> Result<Model, DocumentError> {
        let mut importer = ModelImporter::new();
        importer.add_elements(document.elements)?;
        importer.add_relationships(document.relationships)?;

        let model = importer.finish();
        info!(
            elements = model.element_count(),
            relationships = model.relationship_count(),
            "imported model"
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{ElementKind, InteractionStyle, Location};

    fn element(id: &str, kind: ElementKind, name: &str, parent: Option<&str>) -> ElementDocument {
        ElementDocument {
            id: id.to_string(),
            kind,
            name: name.to_string(),
            description: String::new(),
            technology: None,
            location: Location::Unspecified,
            parent_id: parent.map(str::to_string),
            tags: String::new(),
        }
    }

    fn relationship(id: &str, source: &str, destination: &str) -> RelationshipDocument {
        RelationshipDocument {
            id: id.to_string(),
            source_id: source.to_string(),
            destination_id: destination.to_string(),
            description: "Uses".to_string(),
            technology: None,
            interaction_style: InteractionStyle::Synchronous,
            tags: String::new(),
        }
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let mut model = Model::new();
        let user = model.add_person(Location::External, "User", "A user").unwrap();
        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        let web = model.add_container(system, "Web", "Serves pages", "Rust").unwrap();
        let router = model.add_component(web, "Router", "", "axum").unwrap();
        model.element_mut(web).unwrap().add_tags(["Frontend"]);
        model
            .uses(user, web, ("Browses", "HTTPS", InteractionStyle::Asynchronous))
            .unwrap()
            .add_tags(["Public"]);
        model.uses(router, router, "Recurses").unwrap();

        let document = model.to_document();
        let restored = Model::from_document(document.clone()).unwrap();

        assert_eq!(restored.to_document(), document);
        assert_eq!(restored.stats(), model.stats());

        let web = restored.element_by_id(&web.to_string()).unwrap();
        assert_eq!(web.canonical_name().as_str(), "Container://S/Web");
        assert_eq!(web.tags(), "Element,Container,Frontend");
    }

    #[test]
    fn test_imported_ids_are_not_reused() {
        let document = ModelDocument {
            elements: vec![element("7", ElementKind::SoftwareSystem, "S", None)],
            relationships: vec![],
        };
        let mut model = Model::from_document(document).unwrap();
        let next = model.add_person(Location::Internal, "User", "").unwrap();
        assert_eq!(next.value(), 8);
    }

    #[test]
    fn test_children_before_parents_fail() {
        let document = ModelDocument {
            elements: vec![
                element("2", ElementKind::Container, "Web", Some("1")),
                element("1", ElementKind::SoftwareSystem, "S", None),
            ],
            relationships: vec![],
        };
        assert!(matches!(
            Model::from_document(document),
            Err(DocumentError::UnknownParent { .. })
        ));
    }

    #[test]
    fn test_invalid_documents_are_rejected() {
        let duplicate = ModelDocument {
            elements: vec![
                element("1", ElementKind::Person, "A", None),
                element("1", ElementKind::Person, "B", None),
            ],
            relationships: vec![],
        };
        assert!(matches!(
            Model::from_document(duplicate),
            Err(DocumentError::DuplicateId(_))
        ));

        let same_name = ModelDocument {
            elements: vec![
                element("1", ElementKind::Person, "A", None),
                element("2", ElementKind::Person, "A", None),
            ],
            relationships: vec![],
        };
        assert!(matches!(
            Model::from_document(same_name),
            Err(DocumentError::Model(_))
        ));

        let orphan = ModelDocument {
            elements: vec![element("1", ElementKind::Component, "C", None)],
            relationships: vec![],
        };
        assert!(matches!(
            Model::from_document(orphan),
            Err(DocumentError::MissingParent { .. })
        ));

        let bad_id = ModelDocument {
            elements: vec![element("one", ElementKind::Person, "A", None)],
            relationships: vec![],
        };
        assert!(matches!(
            Model::from_document(bad_id),
            Err(DocumentError::InvalidId(_))
        ));
    }

    #[test]
    fn test_dangling_relationship_is_rejected() {
        let document = ModelDocument {
            elements: vec![element("1", ElementKind::SoftwareSystem, "S", None)],
            relationships: vec![relationship("2", "1", "9")],
        };
        match Model::from_document(document) {
            Err(DocumentError::UnknownElement {
                relationship,
                element,
            }) => {
                assert_eq!(relationship, "2");
                assert_eq!(element, "9");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_relationship_id_clashing_with_element_is_rejected() {
        let document = ModelDocument {
            elements: vec![element("1", ElementKind::SoftwareSystem, "S", None)],
            relationships: vec![relationship("1", "1", "1")],
        };
        assert!(matches!(
            Model::from_document(document),
            Err(DocumentError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_largest_id_is_rejected() {
        let document = ModelDocument {
            elements: vec![element(&u64::MAX.to_string(), ElementKind::Person, "A", None)],
            relationships: vec![],
        };
        assert!(matches!(
            Model::from_document(document),
            Err(DocumentError::InvalidId(_))
        ));

        let largest_usable = (u64::MAX - 1).to_string();
        let document = ModelDocument {
            elements: vec![element(&largest_usable, ElementKind::Person, "A", None)],
            relationships: vec![],
        };
        let model = Model::from_document(document).unwrap();
        assert!(model.element_by_id(&largest_usable).is_some());
    }

    #[test]
    fn test_ids_resolve_in_any_numeric_spelling() {
        let document = ModelDocument {
            elements: vec![
                element("01", ElementKind::SoftwareSystem, "S", None),
                element("2", ElementKind::Container, "Web", Some("1")),
            ],
            relationships: vec![relationship("3", "002", "1")],
        };
        let model = Model::from_document(document).unwrap();

        let exported = model.to_document();
        assert_eq!(exported.elements[0].id, "1");
        assert_eq!(exported.elements[1].parent_id.as_deref(), Some("1"));
        assert_eq!(exported.relationships[0].source_id, "2");
    }

    #[test]
    fn test_tags_holding_separators_survive_round_trip() {
        let mut model = Model::new();
        let system = model.add_software_system(Location::Internal, "S", "").unwrap();
        model.element_mut(system).unwrap().add_tags(["a,b"]);
        let before = model.element(system).unwrap().tag_list().len();

        let restored = Model::from_document(model.to_document()).unwrap();
        let system = restored.element_by_id(&system.to_string()).unwrap();
        assert_eq!(system.tag_list().len(), before);
        assert_eq!(system.tags(), "Element,Software System,a,b");
    }
}
