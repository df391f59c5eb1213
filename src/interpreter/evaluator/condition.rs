use crate::{
    ast::{Comparison, Condition},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<R, W> Context<'_, R, W> {
    /// Evaluates a condition to a boolean.
    ///
    /// Both operands of `and`/`or` are always evaluated; conditions have no
    /// side effects, so only the error reported can depend on the order.
    ///
    /// # Errors
    /// Any error from evaluating the compared factors.
    pub fn eval_condition(&self, condition: &Condition) -> EvalResult<bool> {
        match condition {
            Condition::Comparison(comparison) => self.eval_comparison(comparison),
            Condition::Not { condition, .. } => Ok(!self.eval_condition(condition)?),
            Condition::And { left, right, .. } => {
                let left = self.eval_condition(left)?;
                let right = self.eval_condition(right)?;
                Ok(left && right)
            },
            Condition::Or { left, right, .. } => {
                let left = self.eval_condition(left)?;
                let right = self.eval_condition(right)?;
                Ok(left || right)
            },
        }
    }

    fn eval_comparison(&self, comparison: &Comparison) -> EvalResult<bool> {
        let left = self.eval_factor(&comparison.left)?;
        let right = self.eval_factor(&comparison.right)?;
        Ok(comparison.op.apply(left, right))
    }
}
