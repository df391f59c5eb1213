use crate::{
    ast::{AdditiveOperator, Expression, Factor, Term},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::i64_to_i32_checked,
};

impl<R, W> Context<'_, R, W> {
    /// Evaluates an additive expression.
    ///
    /// The right-leaning chain is folded left to right, so `10 - 3 - 2` is
    /// `5`. Each step is computed in `i64` and narrowed back to `i32`; a
    /// step outside the 32-bit range fails with the whole expression's text
    /// and line.
    ///
    /// # Errors
    /// `Overflow`, `Underflow`, or `Uninitialized` from a nested factor.
    pub fn eval_expression(&self, expr: &Expression) -> EvalResult<i32> {
        let mut acc = self.eval_term(expr.term())?;
        let mut link = expr;

        while let Some((op, rest)) = link.tail() {
            let rhs = i64::from(self.eval_term(rest.term())?);
            let wide = match op {
                AdditiveOperator::Add => i64::from(acc) + rhs,
                AdditiveOperator::Sub => i64::from(acc) - rhs,
            };
            acc = i64_to_i32_checked(wide, expr.line_number(), expr)?;
            link = rest;
        }

        Ok(acc)
    }

    /// Evaluates a multiplicative chain, folded left to right like
    /// [`Self::eval_expression`].
    ///
    /// # Errors
    /// `Overflow`, `Underflow`, or `Uninitialized` from a nested factor.
    pub fn eval_term(&self, term: &Term) -> EvalResult<i32> {
        let mut acc = self.eval_factor(term.factor())?;
        let mut link = term;

        while let Some(rest) = link.tail() {
            let rhs = i64::from(self.eval_factor(rest.factor())?);
            acc = i64_to_i32_checked(i64::from(acc) * rhs, term.line_number(), term)?;
            link = rest;
        }

        Ok(acc)
    }

    /// Evaluates a factor.
    ///
    /// # Errors
    /// `Uninitialized` if a referenced variable has no value.
    pub fn eval_factor(&self, factor: &Factor) -> EvalResult<i32> {
        match factor {
            Factor::Number { value, .. } => Ok(*value),
            Factor::Identifier { name, line } => {
                self.symbols
                    .get(name)
                    .ok_or_else(|| RuntimeError::Uninitialized { name: name.clone(),
                                                                 line: *line, })
            },
            Factor::Parenthesized { expr, .. } => self.eval_expression(expr),
        }
    }
}
