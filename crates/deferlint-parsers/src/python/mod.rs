use std::path::{Path, PathBuf};

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

use crate::canon;

/// Finds every function definition; `__init__` filtering happens in Rust
/// because the C library does not evaluate `#eq?` predicates.
const CONSTRUCTOR_QUERY: &str = r#"
(function_definition
  name: (identifier) @ctor.name
  parameters: (parameters) @ctor.params)
"#;

/// A parsed Python module: its path, full source text, and syntax tree.
#[derive(Debug)]
pub struct SourceModule {
    pub path: PathBuf,
    pub source: String,
    tree: Tree,
}

impl SourceModule {
    /// The single top-level expression of the module, when that is all the
    /// module holds. Used to parse an expected-default expression through
    /// the same grammar as scanned code.
    pub fn sole_expression(&self) -> Option<Node<'_>> {
        let root = self.tree.root_node();
        if root.named_child_count() != 1 {
            return None;
        }
        let stmt = root.named_child(0)?;
        if stmt.kind() != "expression_statement" {
            return None;
        }
        // Assignments nest inside expression_statement; they are not
        // expressions.
        let expr = stmt.named_child(0)?;
        match expr.kind() {
            "assignment" | "augmented_assignment" => None,
            _ => Some(expr),
        }
    }
}

/// One parameter in a constructor signature, in declaration order.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    /// 1-based line of the parameter name.
    pub line: u32,
    /// Byte offset just past the parameter, annotation and default included.
    pub end_byte: usize,
    pub annotated: bool,
    /// `*args` / `**kwargs`. Splats never carry defaults and are excluded
    /// from default accounting.
    pub is_splat: bool,
    pub default: Option<DefaultExpr>,
}

/// A parameter's default expression, locatable and pre-canonicalized.
#[derive(Debug, Clone)]
pub struct DefaultExpr {
    /// 1-based line of the expression.
    pub line: u32,
    pub start_byte: usize,
    pub end_byte: usize,
    pub canonical: String,
}

/// An `__init__` definition with its ordered parameter list.
#[derive(Debug, Clone)]
pub struct ConstructorSignature {
    pub params: Vec<Param>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("query error: {0}")]
    Query(String),
    #[error("parser failure on {}", .0.display())]
    ParseFailed(PathBuf),
    #[error("syntax error in {}", .0.display())]
    Syntax(PathBuf),
}

pub struct PythonParser {
    parser: Parser,
    ctor_query: Query,
}

impl PythonParser {
    pub fn new() -> Result<Self, ParseError> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let ctor_query = Query::new(&language, CONSTRUCTOR_QUERY)
            .map_err(|e| ParseError::Query(format!("{e}")))?;
        Ok(Self { parser, ctor_query })
    }

    /// Parse a module's full text. Fails when tree-sitter reports any
    /// syntax error; a broken file aborts the run rather than being
    /// reported as a violation.
    pub fn parse_module(&mut self, path: &Path, source: String) -> Result<SourceModule, ParseError> {
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or_else(|| ParseError::ParseFailed(path.to_path_buf()))?;
        if tree.root_node().has_error() {
            return Err(ParseError::Syntax(path.to_path_buf()));
        }
        Ok(SourceModule {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }

    /// Every `__init__` definition in the module. The query matches at any
    /// nesting depth, so constructors of nested classes and functions are
    /// included.
    pub fn constructors(&self, module: &SourceModule) -> Vec<ConstructorSignature> {
        let bytes = module.source.as_bytes();
        let capture_names = self.ctor_query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.ctor_query, module.tree.root_node(), bytes);

        let mut ctors = Vec::new();
        while let Some(m) = matches.next() {
            let mut name = "";
            let mut params_node = None;
            for cap in m.captures {
                match capture_names[cap.index as usize] {
                    "ctor.name" => name = node_text(cap.node, bytes),
                    "ctor.params" => params_node = Some(cap.node),
                    _ => {}
                }
            }
            if name != "__init__" {
                continue;
            }
            let Some(params_node) = params_node else { continue };
            ctors.push(ConstructorSignature {
                params: extract_params(params_node, bytes),
            });
        }
        ctors
    }

    /// Canonical form of a standalone expression, parsed through the same
    /// grammar and renderer as scanned defaults.
    pub fn canonical_expression(&mut self, expr: &str) -> Result<String, ParseError> {
        let module = self.parse_module(Path::new("<expression>"), expr.to_string())?;
        let node = module
            .sole_expression()
            .ok_or_else(|| ParseError::Syntax(module.path.clone()))?;
        Ok(canon::canonical_form(node, module.source.as_bytes()))
    }
}

fn extract_params(parameters: Node<'_>, source: &[u8]) -> Vec<Param> {
    let mut params = Vec::new();
    let mut walk = parameters.walk();
    for child in parameters.named_children(&mut walk) {
        match child.kind() {
            "identifier" => params.push(Param {
                name: node_text(child, source).to_string(),
                line: line_of(child),
                end_byte: child.end_byte(),
                annotated: false,
                is_splat: false,
                default: None,
            }),
            "typed_parameter" => {
                // The pattern is the first named child; `*args: T` nests a
                // splat pattern here.
                let Some(pattern) = child.named_child(0) else { continue };
                match pattern.kind() {
                    "identifier" => params.push(Param {
                        name: node_text(pattern, source).to_string(),
                        line: line_of(pattern),
                        end_byte: child.end_byte(),
                        annotated: true,
                        is_splat: false,
                        default: None,
                    }),
                    "list_splat_pattern" | "dictionary_splat_pattern" => {
                        params.push(splat_param(pattern, child.end_byte(), source));
                    }
                    _ => {}
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                let Some(name) = child.child_by_field_name("name") else { continue };
                if name.kind() != "identifier" {
                    continue;
                }
                let default = child.child_by_field_name("value").map(|value| DefaultExpr {
                    line: line_of(value),
                    start_byte: value.start_byte(),
                    end_byte: value.end_byte(),
                    canonical: canon::canonical_form(value, source),
                });
                params.push(Param {
                    name: node_text(name, source).to_string(),
                    line: line_of(name),
                    end_byte: child.end_byte(),
                    annotated: child.kind() == "typed_default_parameter",
                    is_splat: false,
                    default,
                });
            }
            "list_splat_pattern" | "dictionary_splat_pattern" => {
                params.push(splat_param(child, child.end_byte(), source));
            }
            // Bare `*` and `/` separators carry no name and no default.
            "keyword_separator" | "positional_separator" => {}
            _ => {}
        }
    }
    params
}

fn splat_param(pattern: Node<'_>, end_byte: usize, source: &[u8]) -> Param {
    let name = pattern
        .named_child(0)
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    Param {
        name,
        line: line_of(pattern),
        end_byte,
        annotated: false,
        is_splat: true,
        default: None,
    }
}

fn line_of(node: Node<'_>) -> u32 {
    node.start_position().row as u32 + 1
}

pub(crate) fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}
