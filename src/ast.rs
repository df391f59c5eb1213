/// A whole CORE program: declarations followed by statements.
///
/// Every node below owns its children outright and records the source line of
/// its first token. Nodes are built once by the parser and never modified;
/// running a program only changes the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Everything between `program` and `begin`.
    pub declarations: DeclarationList,
    /// Everything between `begin` and the final `end`.
    pub statements:   StatementList,
    /// Line number in the source code.
    pub line:         usize,
}

/// A non-empty sequence of declaration lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationList {
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
    /// Line number in the source code.
    pub line:         usize,
}

/// One `int A, B, C;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Names declared by this line, in source order.
    pub names: Vec<String>,
    /// Line number in the source code.
    pub line:  usize,
}

/// A non-empty sequence of statements forming a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementList {
    /// Statements in execution order.
    pub statements: Vec<Statement>,
    /// Line number in the source code.
    pub line:       usize,
}

/// A single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `X = expression;`
    Assign {
        /// The variable being assigned.
        target: String,
        /// The value to store.
        value:  Expression,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if cond then ... [else ...] end;`
    If {
        /// The branch selector.
        condition:   Condition,
        /// Executed when the condition holds.
        then_branch: StatementList,
        /// Executed otherwise, if present.
        else_branch: Option<StatementList>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while cond loop ... end;`
    While {
        /// Re-evaluated before every iteration.
        condition: Condition,
        /// The loop body.
        body:      StatementList,
        /// Line number in the source code.
        line:      usize,
    },
    /// `read A, B;`
    Read {
        /// Variables to fill from the console, in order.
        names: Vec<String>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `write A, B;`
    Write {
        /// Variables to print, in order.
        names: Vec<String>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// An additive expression. Chains lean right: `a - b - c` is stored as
/// `Minus(a, Minus(b, Term(c)))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A lone term.
    Term {
        /// The term.
        term: Term,
        /// Line number in the source code.
        line: usize,
    },
    /// `term + rest`
    Plus {
        /// The left operand.
        term: Term,
        /// Everything after the operator.
        rest: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `term - rest`
    Minus {
        /// The left operand.
        term: Term,
        /// Everything after the operator.
        rest: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

/// A multiplicative expression, right-leaning like [`Expression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A lone factor.
    Factor {
        /// The factor.
        factor: Factor,
        /// Line number in the source code.
        line:   usize,
    },
    /// `factor * rest`
    Multiply {
        /// The left operand.
        factor: Factor,
        /// Everything after the operator.
        rest:   Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

/// The smallest expression unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i32,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable reference.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `( expression )`
    Parenthesized {
        /// The inner expression.
        expr: Box<Expression>,
        /// Line number in the source code.
        line: usize,
    },
}

/// A boolean condition used by `if` and `while`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `( a op b )`
    Comparison(Comparison),
    /// `!cond`
    Not {
        /// The negated condition.
        condition: Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `[ left and right ]`
    And {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `[ left or right ]`
    Or {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// `( left op right )`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// The relational operator.
    pub op:    CompareOperator,
    /// Left operand.
    pub left:  Factor,
    /// Right operand.
    pub right: Factor,
    /// Line number in the source code.
    pub line:  usize,
}

/// Relational operators, in token order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOperator {
    /// `!=`
    NotEqual,
    /// `==`
    Equal,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
}

impl CompareOperator {
    /// Applies the operator to two values.
    ///
    /// ```
    /// use core_lang::ast::CompareOperator;
    ///
    /// assert!(CompareOperator::GreaterEqual.apply(3, 3));
    /// assert!(!CompareOperator::Less.apply(3, 3));
    /// ```
    #[must_use]
    pub const fn apply(self, left: i32, right: i32) -> bool {
        match self {
            Self::NotEqual => left != right,
            Self::Equal => left == right,
            Self::GreaterEqual => left >= right,
            Self::LessEqual => left <= right,
            Self::Greater => left > right,
            Self::Less => left < right,
        }
    }
}

/// The operator joining two links of an additive chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AdditiveOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Read { line, .. }
            | Self::Write { line, .. } => *line,
        }
    }
}

impl Expression {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Term { line, .. } | Self::Plus { line, .. } | Self::Minus { line, .. } => *line,
        }
    }

    /// The leading term of this link.
    #[must_use]
    pub const fn term(&self) -> &Term {
        match self {
            Self::Term { term, .. } | Self::Plus { term, .. } | Self::Minus { term, .. } => term,
        }
    }

    /// The operator and remaining chain after the leading term, if any.
    #[must_use]
    pub fn tail(&self) -> Option<(AdditiveOperator, &Self)> {
        match self {
            Self::Term { .. } => None,
            Self::Plus { rest, .. } => Some((AdditiveOperator::Add, &**rest)),
            Self::Minus { rest, .. } => Some((AdditiveOperator::Sub, &**rest)),
        }
    }
}

impl Term {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Factor { line, .. } | Self::Multiply { line, .. } => *line,
        }
    }

    /// The leading factor of this link.
    #[must_use]
    pub const fn factor(&self) -> &Factor {
        match self {
            Self::Factor { factor, .. } | Self::Multiply { factor, .. } => factor,
        }
    }

    /// The remaining chain after the leading factor, if any.
    #[must_use]
    pub fn tail(&self) -> Option<&Self> {
        match self {
            Self::Factor { .. } => None,
            Self::Multiply { rest, .. } => Some(&**rest),
        }
    }
}

impl Factor {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use core_lang::ast::Factor;
    ///
    /// let factor = Factor::Identifier { name: "X".to_string(),
    ///                                   line: 5, };
    ///
    /// assert_eq!(factor.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Identifier { line, .. }
            | Self::Parenthesized { line, .. } => *line,
        }
    }
}

impl Condition {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Comparison(Comparison { line, .. })
            | Self::Not { line, .. }
            | Self::And { line, .. }
            | Self::Or { line, .. } => *line,
        }
    }
}
