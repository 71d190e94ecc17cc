//! Integration tests for the Python tokenizer over realistic snippets
//!
//! Unit tests beside the tokenizer cover individual rules; these exercise
//! whole documentation-style snippets end to end through the dispatcher.

use tint::highlight::testing::{assert_coverage, token_with_text, visible_kinds};
use tint::highlight::{tokenize, TokenKind};

fn tokenize_python(source: &str) -> Vec<tint::highlight::Token> {
    let tokens = tokenize("python", source).expect("python is supported");
    assert_coverage(source, &tokens);
    tokens
}

#[test]
fn test_decorated_method_snippet() {
    let source = "\
class Greeter:
    @staticmethod
    def greet(name):
        # say hello
        print(\"hello\", name)
";
    let tokens = tokenize_python(source);

    assert_eq!(token_with_text(&tokens, "class").kind, TokenKind::Keyword);
    assert_eq!(token_with_text(&tokens, "Greeter").kind, TokenKind::ClassName);
    assert_eq!(
        token_with_text(&tokens, "@staticmethod").kind,
        TokenKind::Decorator
    );
    assert_eq!(token_with_text(&tokens, "greet").kind, TokenKind::FuncName);
    assert_eq!(token_with_text(&tokens, "name").kind, TokenKind::Plain);
    assert_eq!(token_with_text(&tokens, "# say hello").kind, TokenKind::Comment);
    assert_eq!(token_with_text(&tokens, "print").kind, TokenKind::Builtin);
    assert_eq!(token_with_text(&tokens, "\"hello\"").kind, TokenKind::Str);
}

#[test]
fn test_self_and_constants() {
    let source = "\
def reset(self, value=None):
    self.value = value
    self.dirty = False
";
    let tokens = tokenize_python(source);

    assert_eq!(token_with_text(&tokens, "self").kind, TokenKind::SelfName);
    assert_eq!(token_with_text(&tokens, "None").kind, TokenKind::BuiltinConst);
    assert_eq!(token_with_text(&tokens, "False").kind, TokenKind::BuiltinConst);
}

#[test]
fn test_docstring_spans_lines_as_one_token() {
    let source = "def f():\n    \"\"\"First line.\n    Second line.\n    \"\"\"\n    pass\n";
    let tokens = tokenize_python(source);

    let docstring = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Str)
        .expect("docstring token");
    assert!(docstring.text.contains('\n'));
    assert!(docstring.text.starts_with("\"\"\""));
    assert!(docstring.text.ends_with("\"\"\""));
}

#[test]
fn test_keyword_in_string_is_not_reclassified() {
    let source = "x = \"def y(): pass\"";
    let tokens = tokenize_python(source);

    assert_eq!(
        visible_kinds(&tokens),
        vec![TokenKind::Plain, TokenKind::Punct, TokenKind::Str]
    );
}

#[test]
fn test_def_true_keeps_constant_classification() {
    let tokens = tokenize_python("def True():\n    pass");
    assert_eq!(token_with_text(&tokens, "True").kind, TokenKind::BuiltinConst);

    let tokens = tokenize_python("def foo():\n    pass");
    assert_eq!(token_with_text(&tokens, "foo").kind, TokenKind::FuncName);
}

#[test]
fn test_repeated_calls_are_identical() {
    let source = "for i in range(10):\n    print(i)\n";
    assert_eq!(tokenize_python(source), tokenize_python(source));
}
