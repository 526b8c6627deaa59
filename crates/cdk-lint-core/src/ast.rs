//! Syntax tree model for typed construct source files.
//!
//! The host engine owns the real tree; this module mirrors the node kinds
//! the rules inspect as a closed set of sum types, so traversal code can
//! match exhaustively. Adding a statement or expression kind is a
//! compile-time-checked decision for every consumer.
//!
//! Nodes carry a [`NodeId`] assigned by the host. Host capabilities (type
//! resolution, source text, preceding comments) are keyed by that id, and
//! diagnostics anchor to it. This crate never fabricates ids and never
//! mutates the tree.

use serde::{Deserialize, Serialize};

/// Opaque handle identifying a node in the host's syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single analyzed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Top-level declarations in source order.
    pub items: Vec<Item>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A class declaration.
    Class(ClassDecl),
    /// An interface declaration.
    Interface(InterfaceDecl),
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Node id of the declaration.
    pub id: NodeId,
    /// Class name; `None` for anonymous class expressions.
    pub name: Option<String>,
    /// Name of the extended superclass, if any.
    pub extends: Option<String>,
    /// The class body.
    pub body: ClassBody,
}

/// The body of a class declaration.
///
/// Kept as its own node because the host resolves the class type at the
/// body position and some rules anchor their reports there.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBody {
    /// Node id of the body.
    pub id: NodeId,
    /// Members in source order.
    pub members: Vec<ClassMember>,
}

/// A member of a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// A property definition.
    Property(PropertyDefinition),
    /// A constructor, method, or accessor.
    Method(MethodDefinition),
    /// Any other member kind; not inspected by rules.
    Other(NodeId),
}

/// Explicit accessibility modifier on a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
}

/// The key naming a class or interface member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKey {
    /// A plain identifier key.
    Identifier(String),
    /// A computed, string, or numeric key; not inspected by rules.
    Other,
}

impl MemberKey {
    /// Returns the identifier name, if this key is a plain identifier.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            Self::Other => None,
        }
    }
}

/// A property definition inside a class body.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    /// Node id of the property.
    pub id: NodeId,
    /// Member key.
    pub key: MemberKey,
    /// Explicit accessibility modifier; `None` means implicitly public.
    pub accessibility: Option<Accessibility>,
    /// Whether the property carries the `readonly` modifier.
    pub readonly: bool,
    /// Whether the property is `static`.
    pub is_static: bool,
}

/// The kind of a method definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// The class constructor.
    Constructor,
    /// An ordinary method.
    Method,
    /// A `get` accessor.
    Getter,
    /// A `set` accessor.
    Setter,
}

/// A constructor, method, or accessor inside a class body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
    /// Node id of the method.
    pub id: NodeId,
    /// Constructor, method, or accessor.
    pub kind: MethodKind,
    /// Member key.
    pub key: MemberKey,
    /// Statements of the function body, in source order.
    pub body: Vec<Statement>,
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    /// Node id of the declaration.
    pub id: NodeId,
    /// Interface name.
    pub name: String,
    /// Members in source order.
    pub members: Vec<InterfaceMember>,
}

/// A member of an interface body.
#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceMember {
    /// A property signature.
    Property(PropertySignature),
    /// Any other member kind; not inspected by rules.
    Other(NodeId),
}

/// A property signature inside an interface body.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    /// Node id of the signature.
    pub id: NodeId,
    /// Member key.
    pub key: MemberKey,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `{ ... }`
    Block(BlockStatement),
    /// An expression used as a statement.
    Expr(ExpressionStatement),
    /// `const`/`let`/`var` declaration.
    VarDecl(VariableDeclaration),
    /// `if (..) .. else ..`
    If(IfStatement),
    /// `switch (..) { case ..: .. }`
    Switch(SwitchStatement),
    /// `return ..;`
    Return(ReturnStatement),
    /// Any other statement kind; not inspected by rules.
    Other(NodeId),
}

impl Statement {
    /// Returns the node id of this statement.
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        match self {
            Self::Block(s) => s.id,
            Self::Expr(s) => s.id,
            Self::VarDecl(s) => s.id,
            Self::If(s) => s.id,
            Self::Switch(s) => s.id,
            Self::Return(s) => s.id,
            Self::Other(id) => *id,
        }
    }
}

/// A braced block of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Node id of the block.
    pub id: NodeId,
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// An expression statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// Node id of the statement.
    pub id: NodeId,
    /// The wrapped expression.
    pub expression: Expression,
}

/// A variable declaration statement.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    /// Node id of the statement.
    pub id: NodeId,
    /// Declarators in source order.
    pub declarators: Vec<VariableDeclarator>,
}

/// A single `name = init` declarator.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    /// Node id of the declarator.
    pub id: NodeId,
    /// Bound name.
    pub name: String,
    /// Initializer expression, if present.
    pub init: Option<Expression>,
}

/// An if statement.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// Node id of the statement.
    pub id: NodeId,
    /// Condition expression.
    pub test: Expression,
    /// The `then` branch.
    pub consequent: Box<Statement>,
    /// The `else` branch, if present.
    pub alternate: Option<Box<Statement>>,
}

/// A switch statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    /// Node id of the statement.
    pub id: NodeId,
    /// The switched-on expression.
    pub discriminant: Expression,
    /// Case clauses in declaration order.
    pub cases: Vec<SwitchCase>,
}

/// A single `case`/`default` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// Node id of the clause.
    pub id: NodeId,
    /// Case guard expression; `None` for `default`.
    pub test: Option<Expression>,
    /// Body statements of the clause, in source order.
    pub body: Vec<Statement>,
}

/// A return statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// Node id of the statement.
    pub id: NodeId,
    /// Returned expression, if present.
    pub argument: Option<Expression>,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A `new`-style construction expression.
    New(NewExpression),
    /// The `this` self-reference.
    This(NodeId),
    /// A plain identifier reference.
    Identifier(Identifier),
    /// A literal value.
    Literal(Literal),
    /// Any other expression kind; not inspected by rules.
    Other(NodeId),
}

impl Expression {
    /// Returns the node id of this expression.
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        match self {
            Self::New(e) => e.id,
            Self::This(id) => *id,
            Self::Identifier(e) => e.id,
            Self::Literal(e) => e.id,
            Self::Other(id) => *id,
        }
    }

    /// Returns the construction expression, if this is one.
    #[must_use]
    pub fn as_new(&self) -> Option<&NewExpression> {
        match self {
            Self::New(expr) => Some(expr),
            _ => None,
        }
    }

    /// Returns true if this expression is the `this` self-reference.
    #[must_use]
    pub fn is_this(&self) -> bool {
        matches!(self, Self::This(_))
    }

    /// Returns the string value, if this is a string literal.
    #[must_use]
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(Literal {
                value: LiteralValue::Str(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }
}

/// An identifier reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// Node id of the identifier.
    pub id: NodeId,
    /// Identifier name.
    pub name: String,
}

/// A literal expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// Node id of the literal.
    pub id: NodeId,
    /// Literal value.
    pub value: LiteralValue,
}

/// The value of a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A string literal.
    Str(String),
    /// A numeric literal.
    Num(f64),
    /// A boolean literal.
    Bool(bool),
}

/// A `new`-style construction expression.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    /// Node id of the expression.
    pub id: NodeId,
    /// Name of the invoked constructor.
    pub callee: String,
    /// Ordered argument expressions.
    pub arguments: Vec<Expression>,
}
