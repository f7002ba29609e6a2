//! Policy YAML rendering and parsing.

use super::PolicyDocument;
use crate::error::SerializationError;

/// Render a document as Conjur policy YAML.
///
/// Resources keep document order and absent owners are left out.
///
/// # Errors
///
/// Returns `SerializationError::Yaml` if the emitter fails.
pub fn serialize(doc: &PolicyDocument) -> Result<String, SerializationError> {
    Ok(serde_yaml::to_string(doc)?)
}

/// Parse Conjur policy YAML written with the same tag vocabulary.
///
/// # Errors
///
/// Returns `SerializationError::Yaml` for malformed YAML or unknown tags.
pub fn parse(text: &str) -> Result<PolicyDocument, SerializationError> {
    Ok(serde_yaml::from_str(text)?)
}
