use std::fmt::{self, Display, Formatter};

use crate::ast::{
    CompareOperator, Comparison, Condition, Declaration, Expression, Factor, Program, Statement,
    StatementList, Term,
};

/// One level of indentation.
pub const INDENT: &str = "  ";

/// Renders `program` in canonical form, one construct per line.
///
/// The output parses back to a tree with the same structure.
///
/// # Example
/// ```
/// use core_lang::print_source;
///
/// let printed = print_source("program int X; begin X = 1 + 2; write X; end").unwrap();
/// assert_eq!(printed,
///            "program\n  int X;\n  begin\n    X = 1 + 2;\n    write X;\n  end\n");
/// ```
#[must_use]
pub fn pretty_print(program: &Program) -> String {
    program.to_string()
}

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

fn write_block(f: &mut Formatter<'_>, block: &StatementList, level: usize) -> fmt::Result {
    for statement in &block.statements {
        write_statement(f, statement, level)?;
    }
    Ok(())
}

fn write_statement(f: &mut Formatter<'_>, statement: &Statement, level: usize) -> fmt::Result {
    let pad = indent(level);
    match statement {
        Statement::Assign { target, value, .. } => writeln!(f, "{pad}{target} = {value};"),
        Statement::If { condition,
                        then_branch,
                        else_branch,
                        .. } => {
            writeln!(f, "{pad}if {condition} then")?;
            write_block(f, then_branch, level + 1)?;
            if let Some(else_branch) = else_branch {
                writeln!(f, "{pad}else")?;
                write_block(f, else_branch, level + 1)?;
            }
            writeln!(f, "{pad}end;")
        },
        Statement::While { condition, body, .. } => {
            writeln!(f, "{pad}while {condition} loop")?;
            write_block(f, body, level + 1)?;
            writeln!(f, "{pad}end;")
        },
        Statement::Read { names, .. } => writeln!(f, "{pad}read {};", names.join(", ")),
        Statement::Write { names, .. } => writeln!(f, "{pad}write {};", names.join(", ")),
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "program")?;
        for declaration in &self.declarations.declarations {
            writeln!(f, "{}{declaration}", indent(1))?;
        }
        writeln!(f, "{}begin", indent(1))?;
        write_block(f, &self.statements, 2)?;
        writeln!(f, "{}end", indent(1))
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "int {};", self.names.join(", "))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term { term, .. } => write!(f, "{term}"),
            Self::Plus { term, rest, .. } => write!(f, "{term} + {rest}"),
            Self::Minus { term, rest, .. } => write!(f, "{term} - {rest}"),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factor { factor, .. } => write!(f, "{factor}"),
            Self::Multiply { factor, rest, .. } => write!(f, "{factor} * {rest}"),
        }
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::Parenthesized { expr, .. } => write!(f, "( {expr} )"),
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison(comparison) => write!(f, "{comparison}"),
            Self::Not { condition, .. } => write!(f, "!{condition}"),
            Self::And { left, right, .. } => write!(f, "[ {left} and {right} ]"),
            Self::Or { left, right, .. } => write!(f, "[ {left} or {right} ]"),
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "( {} {} {} )", self.left, self.op, self.right)
    }
}

impl Display for CompareOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::NotEqual => "!=",
            Self::Equal => "==",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
        };
        write!(f, "{operator}")
    }
}
