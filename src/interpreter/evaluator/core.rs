use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    ast::{Program, StatementList},
    error::RuntimeError,
    interpreter::symbol_table::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context borrows the symbol table the parser filled and owns the
/// console endpoints used by `read` and `write`. Only the symbol table is
/// mutated while running; the syntax tree is borrowed immutably.
///
/// ## Usage
///
/// ```
/// use std::io::Cursor;
///
/// use core_lang::{
///     interpreter::{evaluator::core::Context, symbol_table::SymbolTable},
///     parse_source,
/// };
///
/// let mut symbols = SymbolTable::new();
/// let program = parse_source("program int X; begin read X; X = X * 2; write X; end",
///                            &mut symbols).unwrap();
///
/// let mut context = Context::new(&mut symbols, Cursor::new("21\n"), Vec::new());
/// context.exec_program(&program).unwrap();
///
/// let output = String::from_utf8(context.into_output()).unwrap();
/// assert_eq!(output, "X =? X = 42\n");
/// ```
pub struct Context<'a, R, W> {
    pub(in crate::interpreter::evaluator) symbols: &'a mut SymbolTable,
    pub(in crate::interpreter::evaluator) input:   R,
    pub(in crate::interpreter::evaluator) output:  W,
}

impl<'a, R, W> Context<'a, R, W> {
    /// Creates a context over `symbols` reading from `input` and writing to
    /// `output`.
    pub const fn new(symbols: &'a mut SymbolTable, input: R, output: W) -> Self {
        Self { symbols,
               input,
               output }
    }

    /// Read access to the variables.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &*self.symbols
    }

    /// Consumes the context and hands back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Context<'_, R, W> {
    /// Runs every statement of `program` in order.
    ///
    /// # Errors
    /// The first runtime error aborts the run.
    pub fn exec_program(&mut self, program: &Program) -> EvalResult<()> {
        debug!("executing program");
        self.exec_block(&program.statements)?;
        self.output
            .flush()
            .map_err(|source| RuntimeError::Io { source,
                                                 line: program.line })
    }

    /// Runs the statements of one block in order.
    ///
    /// # Errors
    /// The first runtime error aborts the block.
    pub fn exec_block(&mut self, block: &StatementList) -> EvalResult<()> {
        for statement in &block.statements {
            self.exec_statement(statement)?;
        }
        Ok(())
    }
}
