use std::io::Write;

use tracing::debug;

use crate::{
    ast::{MatrixLiteral, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            literal::build_matrix,
        },
        value::{
            matrix::{Matrix, format_row},
            shape::Shape,
        },
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a single statement.
    ///
    /// - A declaration builds its literal, checks it against the header and
    ///   binds the name.
    /// - An assignment evaluates its expression and binds the name. The name
    ///   does not need to be declared first.
    /// - A print writes the named matrix to the output sink.
    ///
    /// Both declarations and assignments replace an existing binding.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::MatrixDeclaration { name,
                                           rows,
                                           cols,
                                           literal,
                                           line, } => {
                let value = Self::eval_declaration(name, Shape::new(*rows, *cols), literal, *line)?;
                self.bind(name, value, *line);
                Ok(())
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.bind(name, value, *line);
                Ok(())
            },
            Statement::Print { name, line } => self.eval_print(name, *line),
        }
    }

    fn eval_declaration(name: &str,
                        declared: Shape,
                        literal: &MatrixLiteral,
                        line: usize)
                        -> EvalResult<Matrix> {
        let value = build_matrix(literal)?;

        if value.shape() != declared {
            return Err(RuntimeError::ShapeMismatch { name: name.to_string(),
                                                     declared,
                                                     actual: value.shape(),
                                                     line });
        }

        Ok(value)
    }

    fn bind(&mut self, name: &str, value: Matrix, line: usize) {
        debug!(name, shape = %value.shape(), line, "binding matrix");
        self.environment_mut().define(name, value);
    }

    /// Writes the matrix bound to `name`:
    ///
    /// ```text
    /// NAME (ROWSxCOLS):
    ///    [a, b]
    ///    [c, d]
    /// ```
    fn eval_print(&mut self, name: &str, line: usize) -> EvalResult<()> {
        let text = {
            let value = self.environment().get(name, line)?;
            let mut text = format!("{name} ({}):\n", value.shape());
            for row in value.rows() {
                text.push_str("   ");
                text.push_str(&format_row(row));
                text.push('\n');
            }
            text
        };
        debug!(name, line, "printing matrix");

        self.output()
            .write_all(text.as_bytes())
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line })
    }
}
