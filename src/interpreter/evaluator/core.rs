use std::io::{self, Write};

use tracing::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::Environment, literal::build_matrix, matmul::matmul},
        value::matrix::Matrix,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context of one program run.
///
/// The context owns the [`Environment`] and the sink that print statements
/// write to. A fresh context starts with no bindings; nothing is shared
/// between contexts, so independent runs cannot interfere.
///
/// ## Usage
///
/// `Context::new()` writes to standard output. Use
/// [`Context::with_output`] to capture output instead, for example into a
/// `Vec<u8>`.
pub struct Context<W: Write = io::Stdout> {
    environment: Environment,
    out:         W,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a new evaluation context that prints to `out`.
    ///
    /// # Example
    /// ```
    /// use matrixlang::{
    ///     ast::{MatrixLiteral, Program, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let literal = MatrixLiteral::from_rows(vec![vec![1, 2]], 1);
    /// let program = Program { statements: vec![Statement::MatrixDeclaration { name: "M".to_string(),
    ///                                                                         rows: 1,
    ///                                                                         cols: 2,
    ///                                                                         literal,
    ///                                                                         line: 1, },
    ///                                          Statement::Print { name: "M".to_string(),
    ///                                                             line: 2, },], };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.eval_program(&program).unwrap();
    ///
    /// let printed = String::from_utf8(context.into_output()).unwrap();
    /// assert_eq!(printed, "M (1x2):\n   [1, 2]\n");
    /// ```
    pub fn with_output(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// The bindings made so far.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(crate) const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub(crate) const fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the context and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes every statement of `program` in order.
    ///
    /// Stops at the first failing statement. Output produced by earlier
    /// statements has already been written by then.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.statements.len(), "evaluating program");

        for statement in &program.statements {
            self.eval_statement(statement)?;
        }

        let line = program.statements.last().map_or(0, Statement::line_number);
        self.out
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line })
    }

    /// Evaluates an expression to a matrix.
    ///
    /// Expression evaluation never changes the environment. Products are
    /// evaluated left operand first, so a chain `A * B * C` is computed as
    /// `(A * B) * C` and a dimension mismatch is reported for that pairing.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The resulting matrix, which carries its shape.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Matrix> {
        match expr {
            Expr::Identifier { name, line } => self.environment.get(name, *line).cloned(),
            Expr::Literal(literal) => build_matrix(literal),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Multiply { left, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                matmul(&left, &right, *line)
            },
        }
    }
}
