//! Go parser.

use std::cell::RefCell;
use std::path::Path;
use std::time::Instant;

use goast_core::config::DEFAULT_MAX_NESTING;
use goast_core::errors::ParseError;
use tree_sitter::Parser;

use crate::ast::File;

use super::lower::Lowerer;
use super::syntax_check;

thread_local! {
    /// One tree-sitter parser per thread; parsers are not `Sync`.
    static PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Parses Go source into the typed [`File`] model.
#[derive(Debug, Clone, Copy)]
pub struct GoParser {
    max_nesting: u32,
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GoParser {
    pub fn new() -> Self {
        Self::with_max_nesting(DEFAULT_MAX_NESTING)
    }

    /// Reject files whose syntax tree nests deeper than `max_nesting` levels.
    pub fn with_max_nesting(max_nesting: u32) -> Self {
        Self { max_nesting }
    }

    /// Parse one file. `base` is the position of the file's first byte
    /// (see [`super::FileSet`]); `path` is used in error messages only.
    pub fn parse(&self, source: &[u8], path: &Path, base: u32) -> Result<File, ParseError> {
        let start = Instant::now();

        let tree = with_parser(|parser| parser.parse(source, None))?.ok_or_else(|| {
            ParseError::NoTree {
                path: path.to_path_buf(),
            }
        })?;
        let root = tree.root_node();

        if let Some(node) = syntax_check::too_deep(root, self.max_nesting) {
            let at = node.start_position();
            tracing::debug!(
                path = %path.display(),
                limit = self.max_nesting,
                "nesting too deep"
            );
            return Err(ParseError::NestingTooDeep {
                path: path.to_path_buf(),
                line: at.row as u32 + 1,
                column: at.column as u32 + 1,
                limit: self.max_nesting,
            });
        }

        if let Some(issue) = syntax_check::first_error(root, source) {
            tracing::debug!(
                path = %path.display(),
                line = issue.line,
                column = issue.column,
                "syntax error"
            );
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: issue.line,
                column: issue.column,
                offset: issue.offset,
                message: issue.message,
            });
        }

        let file = Lowerer::new(root, source, base).lower_file(root, path)?;

        tracing::debug!(
            path = %path.display(),
            package = %file.name.name,
            decls = file.decls.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "parsed file"
        );
        Ok(file)
    }
}

/// Run `f` with this thread's parser, creating it on first use.
fn with_parser<R>(f: impl FnOnce(&mut Parser) -> R) -> Result<R, ParseError> {
    PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let mut parser = match slot.take() {
            Some(parser) => parser,
            None => new_parser()?,
        };
        let out = f(&mut parser);
        *slot = Some(parser);
        Ok(out)
    })
}

fn new_parser() -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| ParseError::Grammar {
            message: e.to_string(),
        })?;
    Ok(parser)
}
