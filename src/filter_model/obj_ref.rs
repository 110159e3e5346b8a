//! Object references and reference equality

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a metadata object (display form, date data set, attribute)
///
/// Serialized in one of three shapes:
/// - `{ uri: "/gdc/md/..." }`
/// - `{ localIdentifier: "..." }`
/// - `{ identifier: "...", type: "label" }` (type optional)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjRef {
    Uri {
        uri: String,
    },
    LocalId {
        #[serde(rename = "localIdentifier")]
        local_identifier: String,
    },
    Identifier {
        identifier: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        object_type: Option<String>,
    },
}

impl ObjRef {
    /// Identifier reference without an object type
    pub fn id(identifier: impl Into<String>) -> Self {
        ObjRef::Identifier {
            identifier: identifier.into(),
            object_type: None,
        }
    }

    /// Identifier reference with an explicit object type
    pub fn typed_id(identifier: impl Into<String>, object_type: impl Into<String>) -> Self {
        ObjRef::Identifier {
            identifier: identifier.into(),
            object_type: Some(object_type.into()),
        }
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        ObjRef::Uri { uri: uri.into() }
    }

    pub fn local_id(local_identifier: impl Into<String>) -> Self {
        ObjRef::LocalId {
            local_identifier: local_identifier.into(),
        }
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjRef::Uri { uri } => write!(f, "uri:{}", uri),
            ObjRef::LocalId { local_identifier } => write!(f, "local:{}", local_identifier),
            ObjRef::Identifier { identifier, object_type: Some(t) } => {
                write!(f, "{}:{}", t, identifier)
            }
            ObjRef::Identifier { identifier, object_type: None } => write!(f, "id:{}", identifier),
        }
    }
}

/// Structural reference equality
///
/// References of different shapes are never equal. Identifier references
/// compare both the identifier and the object type, so an untyped reference
/// does not equal a typed one. This keeps the relation transitive.
pub fn refs_equal(a: &ObjRef, b: &ObjRef) -> bool {
    match (a, b) {
        (ObjRef::Uri { uri: a }, ObjRef::Uri { uri: b }) => a == b,
        (
            ObjRef::LocalId { local_identifier: a },
            ObjRef::LocalId { local_identifier: b },
        ) => a == b,
        (
            ObjRef::Identifier { identifier: a_id, object_type: a_type },
            ObjRef::Identifier { identifier: b_id, object_type: b_type },
        ) => a_id == b_id && a_type == b_type,
        _ => false,
    }
}
