use crate::interpreter::value::matrix::Element;

/// A whole program: the statements of a source file in execution order.
///
/// The grammar describes the statement list recursively, but the parser
/// flattens it so that evaluation is a plain loop over `statements`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a top-level statement.
///
/// Statements never produce a value. They either update the environment or
/// write to the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A matrix declaration with an explicit header, e.g. `A[2, 2] = [[1, 0],
    /// [0, 1]]`.
    MatrixDeclaration {
        /// The name being declared.
        name:    String,
        /// Row count stated in the header.
        rows:    usize,
        /// Column count stated in the header.
        cols:    usize,
        /// The literal contents.
        literal: MatrixLiteral,
        /// Line number in the source code.
        line:    usize,
    },
    /// An assignment binding a name to the result of an expression.
    Assignment {
        /// The name being bound.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print NAME`.
    Print {
        /// The name to print.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use matrixlang::ast::Statement;
    ///
    /// let statement = Statement::Print { name: "M".to_string(),
    ///                                    line: 3, };
    ///
    /// assert_eq!(statement.line_number(), 3);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::MatrixDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Print { line, .. } => *line,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression evaluates to a matrix together with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a bound matrix by name.
    Identifier {
        /// Name of the matrix.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An inline matrix literal.
    Literal(MatrixLiteral),
    /// A parenthesized expression. Only affects how the tree is built.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Matrix product of two operands.
    ///
    /// Chains are left-nested: `A * B * C` is
    /// `Multiply(Multiply(A, B), C)`.
    Multiply {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use matrixlang::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal(MatrixLiteral { line, .. })
            | Self::Identifier { line, .. }
            | Self::Grouping { line, .. }
            | Self::Multiply { line, .. } => *line,
        }
    }

    /// Builds a left-nested product from two operands.
    #[must_use]
    pub fn multiply(left: Self, right: Self, line: usize) -> Self {
        Self::Multiply { left: Box::new(left),
                         right: Box::new(right),
                         line }
    }
}

/// A bracketed matrix literal such as `[[1, 2], [3, 4]]`.
///
/// The rows are not checked for rectangularity here; that happens when the
/// literal is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixLiteral {
    /// Rows in declaration order.
    pub rows: Vec<Row>,
    /// Line number in the source code.
    pub line: usize,
}

/// One bracketed row of a matrix literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The integers of the row, left to right.
    pub values: Vec<Element>,
    /// Line number in the source code.
    pub line:   usize,
}

impl MatrixLiteral {
    /// Builds a literal from nested vectors, giving every row the literal's
    /// line. Handy when constructing trees by hand.
    ///
    /// ## Example
    /// ```
    /// use matrixlang::ast::MatrixLiteral;
    ///
    /// let literal = MatrixLiteral::from_rows(vec![vec![1, 2], vec![3, 4]], 1);
    ///
    /// assert_eq!(literal.rows.len(), 2);
    /// assert_eq!(literal.rows[1].values, vec![3, 4]);
    /// ```
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Element>>, line: usize) -> Self {
        Self { rows: rows.into_iter()
                         .map(|values| Row { values, line })
                         .collect(),
               line }
    }
}
