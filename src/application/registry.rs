//! Read-mostly snapshot of the host's registered content types.

use crate::domain::entities::ContentTypeDescriptor;

/// Content types captured once per request scope.
///
/// Both rendering sub-steps iterate the same snapshot, so counts and the
/// public-type check cannot drift within a render. Explicitly passed, never
/// a process-wide singleton.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: Vec<ContentTypeDescriptor>,
}

impl TypeRegistry {
    /// Capture the registry in the host's iteration order.
    pub fn capture(types: Vec<ContentTypeDescriptor>) -> Self {
        Self { types }
    }

    /// Public descriptors in capture order.
    pub fn public_types(&self) -> impl Iterator<Item = &ContentTypeDescriptor> {
        self.types.iter().filter(|descriptor| descriptor.public)
    }

    /// Whether `kind` names a registered public type.
    pub fn is_public(&self, kind: &str) -> bool {
        self.public_types().any(|descriptor| descriptor.slug == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
