//! Conjur policy model.
//!
//! A policy document is an ordered list of tagged resources. Each kind maps to
//! exactly one YAML tag:
//!
//! | Kind       | Tag         | Form                          |
//! |------------|-------------|-------------------------------|
//! | `Host`     | `!host`     | scalar id                     |
//! | `Policy`   | `!policy`   | mapping `id`, `owner`, `body` |
//! | `Variable` | `!variable` | scalar id                     |
//! | `Permit`   | `!permit`   | mapping `role`, `privileges`, `resource` |

use serde::{Deserialize, Serialize};

mod serialize;
mod translate;

pub use serialize::{parse, serialize};
pub use translate::{PolicyTranslator, Scope};

/// YAML tags of the resource vocabulary.
pub mod tags {
    pub const HOST: &str = "host";
    pub const POLICY: &str = "policy";
    pub const VARIABLE: &str = "variable";
    pub const PERMIT: &str = "permit";
}

/// A named actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Host {
    pub id: String,
}

impl Host {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A secret placeholder. Never carries a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable {
    pub id: String,
}

impl Variable {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A nested namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    /// Only set on policies directly under the document root.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "owner")]
    pub owner: Option<Host>,
    #[serde(default)]
    pub body: Vec<Resource>,
}

/// A privilege grant from a role to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permit {
    pub role: Reference,
    pub privileges: Vec<String>,
    pub resource: Reference,
}

/// A tagged pointer to another resource, as used inside `!permit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    #[serde(rename = "host")]
    Host(String),
    #[serde(rename = "policy")]
    Policy(String),
    #[serde(rename = "variable")]
    Variable(String),
}

/// One entry of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource {
    #[serde(rename = "host")]
    Host(Host),
    #[serde(rename = "policy")]
    Policy(Policy),
    #[serde(rename = "variable")]
    Variable(Variable),
    #[serde(rename = "permit")]
    Permit(Permit),
}

impl Resource {
    /// The YAML tag this resource renders with.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Host(_) => tags::HOST,
            Self::Policy(_) => tags::POLICY,
            Self::Variable(_) => tags::VARIABLE,
            Self::Permit(_) => tags::PERMIT,
        }
    }
}

/// An ordered policy document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyDocument {
    resources: Vec<Resource>,
}

impl PolicyDocument {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Top-level resources in document order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Number of `!host` resources at any depth.
    pub fn host_count(&self) -> usize {
        count(&self.resources, &|r| matches!(r, Resource::Host(_)))
    }

    /// Number of `!variable` resources at any depth.
    pub fn variable_count(&self) -> usize {
        count(&self.resources, &|r| matches!(r, Resource::Variable(_)))
    }

    /// Number of `!policy` resources at any depth.
    pub fn policy_count(&self) -> usize {
        count(&self.resources, &|r| matches!(r, Resource::Policy(_)))
    }
}

fn count(resources: &[Resource], pred: &dyn Fn(&Resource) -> bool) -> usize {
    resources
        .iter()
        .map(|r| {
            let nested = match r {
                Resource::Policy(p) => count(&p.body, pred),
                _ => 0,
            };
            usize::from(pred(r)) + nested
        })
        .sum()
}

/// `owner` is written as a tagged `!host` scalar.
mod owner {
    use super::Host;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    enum Tagged<'a> {
        #[serde(rename = "host")]
        Host(&'a Host),
    }

    #[derive(Deserialize)]
    enum TaggedOwned {
        #[serde(rename = "host")]
        Host(Host),
    }

    pub fn serialize<S: Serializer>(owner: &Option<Host>, s: S) -> Result<S::Ok, S::Error> {
        match owner {
            Some(host) => Tagged::Host(host).serialize(s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Host>, D::Error> {
        let TaggedOwned::Host(host) = TaggedOwned::deserialize(d)?;
        Ok(Some(host))
    }
}
