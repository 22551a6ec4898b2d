//! Value-level descriptions of the target type declared by a handler
//! parameter.
use std::any::TypeId;

/// The identity of a scalar (non-collection) target type.
///
/// Two [`ScalarType`]s compare equal if and only if they refer to the same
/// Rust type. The stored name is used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarType {
    id: TypeId,
    name: &'static str,
}

impl ScalarType {
    /// The descriptor for `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// `true` if this descriptor refers to `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// The name of the underlying Rust type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn id(&self) -> TypeId {
        self.id
    }
}

/// The declared shape of a handler parameter: a single scalar value or a
/// list of scalar values.
///
/// Nesting stops at one list level: a list element is always scalar, by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// The parameter binds to at most one value.
    Scalar(ScalarType),
    /// The parameter binds to zero or more values, in extraction order.
    List(ScalarType),
}

impl TypeDescriptor {
    /// The descriptor for a scalar parameter of type `T`.
    pub fn scalar<T: 'static>() -> Self {
        Self::Scalar(ScalarType::of::<T>())
    }

    /// The descriptor for a list parameter with elements of type `T`.
    pub fn list<T: 'static>() -> Self {
        Self::List(ScalarType::of::<T>())
    }

    /// The scalar type that raw values are converted into: the parameter
    /// type itself for scalars, the element type for lists.
    pub fn element(&self) -> ScalarType {
        match self {
            Self::Scalar(inner) | Self::List(inner) => *inner,
        }
    }

    /// `true` if the parameter binds to a list of values.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}
