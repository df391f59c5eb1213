use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<R: BufRead, W: Write> Context<'_, R, W> {
    /// Executes a single statement.
    ///
    /// A `while` whose condition never becomes false runs forever; nothing
    /// here bounds the number of iterations.
    ///
    /// # Errors
    /// Any runtime error raised while evaluating the statement's parts.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(line = statement.line_number(), "executing statement");

        match statement {
            Statement::Assign { target, value, .. } => {
                let value = self.eval_expression(value)?;
                self.symbols.set(target, value);
                Ok(())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval_condition(condition)? {
                    self.exec_block(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)
                } else {
                    Ok(())
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval_condition(condition)? {
                    self.exec_block(body)?;
                }
                Ok(())
            },
            Statement::Read { names, line } => self.exec_read(names, *line),
            Statement::Write { names, line } => self.exec_write(names, *line),
        }
    }
}
