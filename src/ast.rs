use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code. It is used in the AST to represent literal expressions and as
/// a convenient container for constants during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal. The payload is the text between the quotes; the
    /// language has no escape sequences.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// function literals, calls, arithmetic, conditionals, arrays, and hashes.
/// Each variant models a distinct syntactic construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer, string, or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation (negation or logical NOT).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Array literal expression, e.g. `[1, 2 * 2, "three"]`.
    ArrayLiteral {
        /// Elements of the array, in source order.
        elements: Vec<Self>,
    },
    /// Hash literal expression, e.g. `{"one": 1, true: 2}`.
    HashLiteral {
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Self, Self)>,
    },
    /// Conditional expression. Both arms are blocks; a missing alternative
    /// yields null at runtime.
    IfExpr {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// Function literal, e.g. `ft(x, y) { x + y; }`.
    FunctionLiteral {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// Function call expression. The callee is itself an expression, so both
    /// `add(1, 2)` and `ft(x) { x; }(5)` are calls.
    FunctionCall {
        /// The expression producing the function being called.
        callee:    Box<Self>,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// Index expression over an array or a hash, e.g. `xs[0]` or
    /// `ages["ana"]`.
    Index {
        /// The collection being indexed.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::IfExpr { condition,
                           consequence,
                           alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "ft(")?;
                for (index, name) in parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}")?;
                }
                write!(f, ") {body}")
            },
            Self::FunctionCall { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    for (index, expr) in exprs.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{expr}")?;
    }
    Ok(())
}

/// Represents a statement.
///
/// Statements are the units sequenced by programs and blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable binding using `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expr,
    },
    /// A `return` statement, with an optional payload.
    Return {
        /// The returned value, or `None` for a bare `return;`.
        value: Option<Expr>,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

/// An ordered sequence of statements enclosed in braces.
///
/// Blocks appear as the arms of `if` expressions and as function bodies. A
/// `return` inside a block unwinds to the nearest function boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// The root of a parsed source text: an ordered sequence of statements.
///
/// The `Display` implementation renders the canonical, fully parenthesized
/// form of the program; re-parsing that rendering yields a structurally
/// identical tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. The parser gives each
/// one a precedence; the evaluator dispatches on operand types.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating integer division.
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinaryOperator {
    /// Returns the operator's source symbol, as used in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl UnaryOperator {
    /// Returns the operator's source symbol, as used in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
