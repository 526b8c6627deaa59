//! Runs the full recommended rule set over one file with every violation
//! kind present, against a hash-map-backed host double.

use std::collections::HashMap;

use cdk_lint_core::ast::{
    Accessibility, ClassBody, ClassDecl, ClassMember, Expression, ExpressionStatement, Identifier,
    InterfaceDecl, InterfaceMember, Item, Literal, LiteralValue, MemberKey, MethodDefinition,
    MethodKind, NewExpression, NodeId, PropertyDefinition, PropertySignature, SourceFile,
    Statement,
};
use cdk_lint_core::{Comment, DeclaredType, Diagnostic, Host, RuleContext, TypeDescriptor};
use cdk_lint_rules::{recommended_rules, strict_rules, Rule};

#[derive(Default)]
struct MapHost {
    types: HashMap<NodeId, TypeDescriptor>,
    comments: HashMap<NodeId, Vec<Comment>>,
    sources: HashMap<NodeId, String>,
}

impl Host for MapHost {
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

fn storage_type() -> TypeDescriptor {
    TypeDescriptor::Declared(
        DeclaredType::class("Storage")
            .with_base(DeclaredType::class("Construct"))
            .with_constructor_params(["scope", "id"]),
    )
}

fn bucket_type() -> TypeDescriptor {
    TypeDescriptor::Declared(
        DeclaredType::class("Bucket")
            .with_base(DeclaredType::class("Construct"))
            .with_constructor_params(["scope", "id"]),
    )
}

/// interface StorageProps { legacy: TestClass }
/// class Storage extends Construct {
///   public endpoint: string;
///   constructor(scope: Construct, id: string) {
///     new Bucket(scope, "StorageBucket");
///   }
/// }
fn fixture() -> (SourceFile, MapHost) {
    let file = SourceFile {
        items: vec![
            Item::Interface(InterfaceDecl {
                id: NodeId(100),
                name: "StorageProps".into(),
                members: vec![InterfaceMember::Property(PropertySignature {
                    id: NodeId(101),
                    key: MemberKey::Identifier("legacy".into()),
                })],
            }),
            Item::Class(ClassDecl {
                id: NodeId(1),
                name: Some("Storage".into()),
                extends: Some("Construct".into()),
                body: ClassBody {
                    id: NodeId(2),
                    members: vec![
                        ClassMember::Property(PropertyDefinition {
                            id: NodeId(10),
                            key: MemberKey::Identifier("endpoint".into()),
                            accessibility: Some(Accessibility::Public),
                            readonly: false,
                            is_static: false,
                        }),
                        ClassMember::Method(MethodDefinition {
                            id: NodeId(3),
                            kind: MethodKind::Constructor,
                            key: MemberKey::Identifier("constructor".into()),
                            body: vec![Statement::Expr(ExpressionStatement {
                                id: NodeId(19),
                                expression: Expression::New(NewExpression {
                                    id: NodeId(20),
                                    callee: "Bucket".into(),
                                    arguments: vec![
                                        Expression::Identifier(Identifier {
                                            id: NodeId(21),
                                            name: "scope".into(),
                                        }),
                                        Expression::Literal(Literal {
                                            id: NodeId(22),
                                            value: LiteralValue::Str("StorageBucket".into()),
                                        }),
                                    ],
                                }),
                            })],
                        }),
                    ],
                },
            }),
        ],
    };

    let mut host = MapHost::default();
    host.types.insert(NodeId(1), storage_type());
    host.types.insert(NodeId(2), storage_type());
    host.types.insert(NodeId(20), bucket_type());
    host.types.insert(
        NodeId(101),
        TypeDescriptor::Declared(DeclaredType::class("TestClass")),
    );
    host.sources
        .insert(NodeId(10), "public endpoint: string;".to_string());

    (file, host)
}

fn run_recommended(file: &SourceFile, host: &MapHost) -> Vec<Diagnostic> {
    let ctx = RuleContext::new(host);
    let mut diagnostics = Vec::new();
    for rule in recommended_rules() {
        diagnostics.extend(rule.check(&ctx, file));
    }
    diagnostics
}

#[test]
fn recommended_rules_flag_every_planted_violation() {
    let (file, host) = fixture();
    let diagnostics = run_recommended(&file, &host);

    let mut codes: Vec<(&str, NodeId)> = diagnostics
        .iter()
        .map(|d| (d.code.as_str(), d.node))
        .collect();
    codes.sort();
    assert_eq!(
        codes,
        vec![
            ("CDK001", NodeId(101)), // interface property typed as a class
            ("CDK002", NodeId(10)),  // mutable public property
            ("CDK003", NodeId(2)),   // "StorageBucket" contains "Storage"
            ("CDK004", NodeId(10)),  // undocumented public construct property
            ("CDK004", NodeId(101)), // undocumented interface property
            ("CDK005", NodeId(20)),  // `scope` passed instead of `this`
        ]
    );
}

#[test]
fn fixes_target_the_offending_nodes() {
    let (file, host) = fixture();
    let diagnostics = run_recommended(&file, &host);

    let readonly_fix = diagnostics
        .iter()
        .find(|d| d.code == "CDK002")
        .and_then(|d| d.fix.as_ref())
        .expect("readonly fix");
    assert_eq!(readonly_fix.node, NodeId(10));
    assert_eq!(readonly_fix.replacement, "public readonly endpoint: string;");

    let this_fix = diagnostics
        .iter()
        .find(|d| d.code == "CDK005")
        .and_then(|d| d.fix.as_ref())
        .expect("this fix");
    assert_eq!(this_fix.node, NodeId(21));
    assert_eq!(this_fix.replacement, "this");
}

#[test]
fn diagnostic_rendering_is_stable() {
    let (file, host) = fixture();
    let diagnostics = run_recommended(&file, &host);
    let passing_this = diagnostics
        .iter()
        .find(|d| d.code == "CDK005")
        .expect("CDK005 diagnostic");

    insta::assert_snapshot!(passing_this.format().trim_end(), @r"
    CDK005 require-passing-this at node #20
      error: Require passing `this` in a constructor.
      = fix: replace node #21 with `this`
    ");
}

#[test]
fn documented_and_immutable_members_satisfy_the_strict_set() {
    let (mut file, mut host) = fixture();

    // Document both properties, mark the class property readonly, and pass
    // `this` with a distinct ID.
    host.comments.insert(
        NodeId(101),
        vec![Comment::block("* Legacy handle, kept for migration.")],
    );
    host.comments
        .insert(NodeId(10), vec![Comment::block("* Service endpoint.")]);
    host.types.remove(&NodeId(101));

    let Item::Class(class) = &mut file.items[1] else {
        unreachable!()
    };
    let ClassMember::Property(property) = &mut class.body.members[0] else {
        unreachable!()
    };
    property.readonly = true;
    let ClassMember::Method(method) = &mut class.body.members[1] else {
        unreachable!()
    };
    let Statement::Expr(statement) = &mut method.body[0] else {
        unreachable!()
    };
    let Expression::New(invocation) = &mut statement.expression else {
        unreachable!()
    };
    invocation.arguments[0] = Expression::This(NodeId(21));
    invocation.arguments[1] = Expression::Literal(Literal {
        id: NodeId(22),
        value: LiteralValue::Str("UploadTarget".into()),
    });

    let ctx = RuleContext::new(&host);
    let mut diagnostics = Vec::new();
    for rule in strict_rules() {
        diagnostics.extend(rule.check(&ctx, &file));
    }
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
}
