//! Shared fixtures for rule tests: a hash-map-backed host double and
//! builders for the syntax tree shapes the rules inspect.

use std::collections::HashMap;

use cdk_lint_core::ast::{
    ClassBody, ClassDecl, ClassMember, Expression, ExpressionStatement, Identifier, Item, Literal,
    LiteralValue, MemberKey, MethodDefinition, MethodKind, NewExpression, NodeId, SourceFile,
    Statement, VariableDeclaration, VariableDeclarator,
};
use cdk_lint_core::{Comment, DeclaredType, Host, TypeDescriptor};

/// Host double backed by hash maps keyed on node id.
///
/// Anything not seeded resolves to the unknown type, no comments, and empty
/// source text, matching the conservative defaults the rules must tolerate.
#[derive(Default)]
pub struct FakeHost {
    types: HashMap<NodeId, TypeDescriptor>,
    comments: HashMap<NodeId, Vec<Comment>>,
    sources: HashMap<NodeId, String>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, node: NodeId, ty: TypeDescriptor) -> Self {
        self.types.insert(node, ty);
        self
    }

    pub fn with_comments(mut self, node: NodeId, comments: Vec<Comment>) -> Self {
        self.comments.insert(node, comments);
        self
    }

    pub fn with_source(mut self, node: NodeId, text: &str) -> Self {
        self.sources.insert(node, text.to_string());
        self
    }
}

impl Host for FakeHost {
    fn type_at(&self, node: NodeId) -> TypeDescriptor {
        self.types.get(&node).cloned().unwrap_or(TypeDescriptor::Unknown)
    }

    fn comments_before(&self, node: NodeId) -> Vec<Comment> {
        self.comments.get(&node).cloned().unwrap_or_default()
    }

    fn source_text(&self, node: NodeId) -> String {
        self.sources.get(&node).cloned().unwrap_or_default()
    }
}

/// A construct-like type: `Bucket extends Construct`, `constructor(scope, id)`.
pub fn construct_type() -> TypeDescriptor {
    TypeDescriptor::Declared(
        DeclaredType::class("Bucket")
            .with_base(DeclaredType::class("Construct"))
            .with_constructor_params(["scope", "id"]),
    )
}

/// A stack-like type: `MyStack extends Stack`.
pub fn stack_type() -> TypeDescriptor {
    TypeDescriptor::Declared(
        DeclaredType::class("MyStack").with_base(DeclaredType::class("Stack")),
    )
}

/// A plain class type with no construct ancestry.
pub fn plain_class_type(name: &str) -> TypeDescriptor {
    TypeDescriptor::Declared(DeclaredType::class(name))
}

pub fn this_expr(id: u32) -> Expression {
    Expression::This(NodeId(id))
}

pub fn ident(id: u32, name: &str) -> Expression {
    Expression::Identifier(Identifier {
        id: NodeId(id),
        name: name.into(),
    })
}

pub fn str_lit(id: u32, value: &str) -> Expression {
    Expression::Literal(Literal {
        id: NodeId(id),
        value: LiteralValue::Str(value.into()),
    })
}

pub fn new_expr(id: u32, callee: &str, arguments: Vec<Expression>) -> Expression {
    Expression::New(NewExpression {
        id: NodeId(id),
        callee: callee.into(),
        arguments,
    })
}

pub fn expr_stmt(id: u32, expression: Expression) -> Statement {
    Statement::Expr(ExpressionStatement {
        id: NodeId(id),
        expression,
    })
}

pub fn var_stmt(id: u32, name: &str, init: Expression) -> Statement {
    Statement::VarDecl(VariableDeclaration {
        id: NodeId(id),
        declarators: vec![VariableDeclarator {
            id: NodeId(id + 1),
            name: name.into(),
            init: Some(init),
        }],
    })
}

pub fn constructor(id: u32, body: Vec<Statement>) -> ClassMember {
    ClassMember::Method(MethodDefinition {
        id: NodeId(id),
        kind: MethodKind::Constructor,
        key: MemberKey::Identifier("constructor".into()),
        body,
    })
}

/// A class named `name` extending `Construct`, with the given body members.
pub fn class_file(class_id: u32, body_id: u32, name: &str, members: Vec<ClassMember>) -> SourceFile {
    SourceFile {
        items: vec![Item::Class(ClassDecl {
            id: NodeId(class_id),
            name: Some(name.into()),
            extends: Some("Construct".into()),
            body: ClassBody {
                id: NodeId(body_id),
                members,
            },
        })],
    }
}
