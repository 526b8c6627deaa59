//! Type descriptors resolved from syntax positions.
//!
//! The host's type checker owns the real types; rules only ever see this
//! read-only projection: a display name, the base-type chain, and the
//! constructor parameter names. Descriptors are resolved on demand for every
//! query and never cached here.

/// The kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A declared class.
    Class,
    /// A declared interface.
    Interface,
    /// A structural type alias.
    Alias,
    /// A primitive type such as `string`.
    Primitive,
}

/// A concrete declared type with its inheritance chain.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredType {
    /// Display name of the type.
    pub name: String,
    /// Kind of the declaration.
    pub kind: TypeKind,
    /// Direct base types; each carries its own chain.
    pub bases: Vec<DeclaredType>,
    /// Constructor parameter names in declaration order; empty when the
    /// type has no explicit constructor.
    pub constructor_params: Vec<String>,
}

impl DeclaredType {
    /// Creates a declared type with no bases and no constructor.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            bases: Vec::new(),
            constructor_params: Vec::new(),
        }
    }

    /// Creates a declared class type.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// Creates a declared interface type.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Creates a structural alias type.
    #[must_use]
    pub fn alias(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Alias)
    }

    /// Creates a primitive type.
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Primitive)
    }

    /// Adds a direct base type.
    #[must_use]
    pub fn with_base(mut self, base: DeclaredType) -> Self {
        self.bases.push(base);
        self
    }

    /// Sets the constructor parameter names.
    #[must_use]
    pub fn with_constructor_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constructor_params = params.into_iter().map(Into::into).collect();
        self
    }
}

/// A type resolved at a syntax position.
///
/// `Unknown` is the sentinel for unresolved or `any`-like positions; rules
/// treat it as a non-match everywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// Unresolved or `any`-like type.
    Unknown,
    /// A single declared type.
    Declared(DeclaredType),
    /// A union of underlying types.
    Union(Vec<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Returns true for the unresolved sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Flattens unions into the set of concrete declared types.
    ///
    /// `Unknown` members contribute nothing. Nested unions are flattened
    /// recursively.
    #[must_use]
    pub fn declared_types(&self) -> Vec<&DeclaredType> {
        let mut declared = Vec::new();
        self.collect_declared(&mut declared);
        declared
    }

    fn collect_declared<'a>(&'a self, declared: &mut Vec<&'a DeclaredType>) {
        match self {
            Self::Unknown => {}
            Self::Declared(ty) => declared.push(ty),
            Self::Union(members) => {
                for member in members {
                    member.collect_declared(declared);
                }
            }
        }
    }
}
