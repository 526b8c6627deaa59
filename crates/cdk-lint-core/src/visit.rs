//! Visitor over the syntax tree model.
//!
//! This is the dispatch surface rules hang their callbacks on: implement
//! [`Visit`] and override the methods for the node kinds the rule cares
//! about, calling the free function of the same name to continue descending.
//! The default traversal visits every reachable node, including `else`
//! branches, case guards, and construction-expression arguments.

use crate::ast::{
    ClassBody, ClassDecl, ClassMember, Expression, InterfaceDecl, InterfaceMember, Item,
    MethodDefinition, NewExpression, PropertyDefinition, PropertySignature, SourceFile, Statement,
    SwitchCase, VariableDeclarator,
};

/// Syntax tree visitor with default full traversal.
///
/// Each method can be overridden to hook a node kind; the free functions in
/// this module perform the default descent into child nodes.
pub trait Visit<'ast> {
    /// Visits a source file.
    fn visit_source_file(&mut self, node: &'ast SourceFile) {
        visit_source_file(self, node);
    }

    /// Visits a class declaration.
    fn visit_class_decl(&mut self, node: &'ast ClassDecl) {
        visit_class_decl(self, node);
    }

    /// Visits a class body.
    fn visit_class_body(&mut self, node: &'ast ClassBody) {
        visit_class_body(self, node);
    }

    /// Visits a property definition.
    fn visit_property_definition(&mut self, node: &'ast PropertyDefinition) {
        visit_property_definition(self, node);
    }

    /// Visits a constructor, method, or accessor.
    fn visit_method_definition(&mut self, node: &'ast MethodDefinition) {
        visit_method_definition(self, node);
    }

    /// Visits an interface declaration.
    fn visit_interface_decl(&mut self, node: &'ast InterfaceDecl) {
        visit_interface_decl(self, node);
    }

    /// Visits an interface property signature.
    fn visit_property_signature(&mut self, node: &'ast PropertySignature) {
        visit_property_signature(self, node);
    }

    /// Visits a statement.
    fn visit_statement(&mut self, node: &'ast Statement) {
        visit_statement(self, node);
    }

    /// Visits a switch case clause.
    fn visit_switch_case(&mut self, node: &'ast SwitchCase) {
        visit_switch_case(self, node);
    }

    /// Visits a variable declarator.
    fn visit_variable_declarator(&mut self, node: &'ast VariableDeclarator) {
        visit_variable_declarator(self, node);
    }

    /// Visits an expression.
    fn visit_expression(&mut self, node: &'ast Expression) {
        visit_expression(self, node);
    }

    /// Visits a construction expression.
    fn visit_new_expression(&mut self, node: &'ast NewExpression) {
        visit_new_expression(self, node);
    }
}

/// Default traversal for a source file.
pub fn visit_source_file<'ast, V>(v: &mut V, node: &'ast SourceFile)
where
    V: Visit<'ast> + ?Sized,
{
    for item in &node.items {
        match item {
            Item::Class(class) => v.visit_class_decl(class),
            Item::Interface(interface) => v.visit_interface_decl(interface),
        }
    }
}

/// Default traversal for a class declaration.
pub fn visit_class_decl<'ast, V>(v: &mut V, node: &'ast ClassDecl)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_class_body(&node.body);
}

/// Default traversal for a class body.
pub fn visit_class_body<'ast, V>(v: &mut V, node: &'ast ClassBody)
where
    V: Visit<'ast> + ?Sized,
{
    for member in &node.members {
        match member {
            ClassMember::Property(property) => v.visit_property_definition(property),
            ClassMember::Method(method) => v.visit_method_definition(method),
            ClassMember::Other(_) => {}
        }
    }
}

/// Default traversal for a property definition.
pub fn visit_property_definition<'ast, V>(_v: &mut V, _node: &'ast PropertyDefinition)
where
    V: Visit<'ast> + ?Sized,
{
}

/// Default traversal for a method definition.
pub fn visit_method_definition<'ast, V>(v: &mut V, node: &'ast MethodDefinition)
where
    V: Visit<'ast> + ?Sized,
{
    for statement in &node.body {
        v.visit_statement(statement);
    }
}

/// Default traversal for an interface declaration.
pub fn visit_interface_decl<'ast, V>(v: &mut V, node: &'ast InterfaceDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for member in &node.members {
        match member {
            InterfaceMember::Property(property) => v.visit_property_signature(property),
            InterfaceMember::Other(_) => {}
        }
    }
}

/// Default traversal for a property signature.
pub fn visit_property_signature<'ast, V>(_v: &mut V, _node: &'ast PropertySignature)
where
    V: Visit<'ast> + ?Sized,
{
}

/// Default traversal for a statement.
pub fn visit_statement<'ast, V>(v: &mut V, node: &'ast Statement)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Statement::Block(block) => {
            for statement in &block.statements {
                v.visit_statement(statement);
            }
        }
        Statement::Expr(statement) => v.visit_expression(&statement.expression),
        Statement::VarDecl(declaration) => {
            for declarator in &declaration.declarators {
                v.visit_variable_declarator(declarator);
            }
        }
        Statement::If(statement) => {
            v.visit_expression(&statement.test);
            v.visit_statement(&statement.consequent);
            if let Some(alternate) = &statement.alternate {
                v.visit_statement(alternate);
            }
        }
        Statement::Switch(statement) => {
            v.visit_expression(&statement.discriminant);
            for case in &statement.cases {
                v.visit_switch_case(case);
            }
        }
        Statement::Return(statement) => {
            if let Some(argument) = &statement.argument {
                v.visit_expression(argument);
            }
        }
        Statement::Other(_) => {}
    }
}

/// Default traversal for a switch case clause.
pub fn visit_switch_case<'ast, V>(v: &mut V, node: &'ast SwitchCase)
where
    V: Visit<'ast> + ?Sized,
{
    if let Some(test) = &node.test {
        v.visit_expression(test);
    }
    for statement in &node.body {
        v.visit_statement(statement);
    }
}

/// Default traversal for a variable declarator.
pub fn visit_variable_declarator<'ast, V>(v: &mut V, node: &'ast VariableDeclarator)
where
    V: Visit<'ast> + ?Sized,
{
    if let Some(init) = &node.init {
        v.visit_expression(init);
    }
}

/// Default traversal for an expression.
pub fn visit_expression<'ast, V>(v: &mut V, node: &'ast Expression)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Expression::New(expr) => v.visit_new_expression(expr),
        Expression::This(_)
        | Expression::Identifier(_)
        | Expression::Literal(_)
        | Expression::Other(_) => {}
    }
}

/// Default traversal for a construction expression.
pub fn visit_new_expression<'ast, V>(v: &mut V, node: &'ast NewExpression)
where
    V: Visit<'ast> + ?Sized,
{
    for argument in &node.arguments {
        v.visit_expression(argument);
    }
}
