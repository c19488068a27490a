//! Serializable description of a definition.
//!
//! Lets a host keep its event tables in JSON or YAML next to the rest of
//! its configuration. Loaded configs go through [`DefinitionBuilder`], so
//! they are validated exactly like hand-written declarations.
//!
//! ```yaml
//! events:
//!   - name: publish
//!     transitions:
//!       - { from: draft, to: published }
//!   - name: archive
//!     transitions:
//!       - { from: published, to: archived }
//!       - { from: draft, to: archived }
//! ```
//!
//! [`DefinitionBuilder`]: crate::definition::DefinitionBuilder

use crate::core::State;
use crate::definition::builder::DefinitionBuilder;
use crate::definition::error::DefinitionError;
use crate::definition::registry::StateMachineDefinition;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DefinitionConfig<S: State> {
    pub events: Vec<EventConfig<S>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EventConfig<S: State> {
    pub name: String,
    #[serde(default)]
    pub transitions: Vec<TransitionConfig<S>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionConfig<S: State> {
    pub from: S,
    pub to: S,
}

impl<S: State> DefinitionConfig<S> {
    pub fn from_json(input: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_yaml(input: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Validate and build the described definition.
    pub fn into_definition(self) -> Result<StateMachineDefinition<S>, DefinitionError> {
        self.events
            .into_iter()
            .fold(DefinitionBuilder::new(), |builder, event| {
                builder.event(
                    event.name,
                    event.transitions.into_iter().map(|t| (t.from, t.to)),
                )
            })
            .build()
    }
}

impl<S: State> StateMachineDefinition<S> {
    pub fn from_json(input: &str) -> Result<Self, DefinitionError> {
        DefinitionConfig::from_json(input)?.into_definition()
    }

    pub fn from_yaml(input: &str) -> Result<Self, DefinitionError> {
        DefinitionConfig::from_yaml(input)?.into_definition()
    }

    /// Describe this definition, with events and sources sorted by name.
    pub fn to_config(&self) -> DefinitionConfig<S> {
        let mut events: Vec<EventConfig<S>> = self
            .events()
            .map(|(name, table)| {
                let mut transitions: Vec<TransitionConfig<S>> = table
                    .iter()
                    .map(|(from, to)| TransitionConfig {
                        from: from.clone(),
                        to: to.clone(),
                    })
                    .collect();
                transitions.sort_by(|a, b| a.from.name().cmp(b.from.name()));
                EventConfig {
                    name: name.to_string(),
                    transitions,
                }
            })
            .collect();
        events.sort_by(|a, b| a.name.cmp(&b.name));
        DefinitionConfig { events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DefinitionViolation;

    fn s(name: &str) -> String {
        name.to_string()
    }

    const DOCUMENTS_YAML: &str = r#"
events:
  - name: publish
    transitions:
      - { from: draft, to: published }
  - name: archive
    transitions:
      - { from: published, to: archived }
      - { from: draft, to: archived }
"#;

    #[test]
    fn loads_definition_from_yaml() {
        let definition = StateMachineDefinition::<String>::from_yaml(DOCUMENTS_YAML).unwrap();

        assert_eq!(
            definition.lookup("archive", &s("draft")),
            Some(&s("archived"))
        );
        assert_eq!(definition.lookup("publish", &s("archived")), None);
    }

    #[test]
    fn loads_definition_from_json() {
        let json = r#"{"events":[{"name":"checkout","transitions":[{"from":"pending","to":"confirmed"}]}]}"#;
        let definition = StateMachineDefinition::<String>::from_json(json).unwrap();

        assert_eq!(
            definition.lookup("checkout", &s("pending")),
            Some(&s("confirmed"))
        );
    }

    #[test]
    fn missing_transitions_declare_an_empty_event() {
        let json = r#"{"events":[{"name":"noop"}]}"#;
        let definition = StateMachineDefinition::<String>::from_json(json).unwrap();

        assert!(definition.has_event("noop"));
        assert!(definition.table("noop").unwrap().is_empty());
    }

    #[test]
    fn loaded_config_is_validated() {
        let json = r#"{"events":[{"name":"checkout!","transitions":[]}]}"#;
        let err = StateMachineDefinition::<String>::from_json(json).unwrap_err();

        assert_eq!(
            err.violations(),
            &[DefinitionViolation::ReservedMarker {
                event: "checkout!".to_string()
            }]
        );
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = StateMachineDefinition::<String>::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DefinitionError::Json(_)));

        let err = StateMachineDefinition::<String>::from_yaml("events: [").unwrap_err();
        assert!(matches!(err, DefinitionError::Yaml(_)));
    }

    #[test]
    fn to_config_describes_definition_in_sorted_order() {
        let definition = StateMachineDefinition::<String>::from_yaml(DOCUMENTS_YAML).unwrap();
        let config = definition.to_config();

        let names: Vec<&str> = config.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["archive", "publish"]);
        assert_eq!(config.events[0].transitions[0].from, "draft");
        assert_eq!(config.events[0].transitions[1].from, "published");

        let rebuilt = config.into_definition().unwrap();
        assert_eq!(rebuilt, definition);
    }
}
