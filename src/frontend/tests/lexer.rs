//! Lexer 单元测试

use crate::frontend::lexer::tokenize_line;
use crate::util::span::Position;

#[test]
fn test_tokenize_spaces_and_tabs() {
    let tokens = tokenize_line("set\ta  -12", 3);
    let values: Vec<&str> = tokens.iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["set", "a", "-12"]);
    assert_eq!(tokens[0].position, Position::new(3, 1));
    assert_eq!(tokens[1].position, Position::new(3, 5));
    assert_eq!(tokens[2].position, Position::new(3, 8));
}

#[test]
fn test_tokenize_blank_line() {
    assert!(tokenize_line("", 1).is_empty());
    assert!(tokenize_line(" \t ", 1).is_empty());
}

#[test]
fn test_tokenize_trailing_whitespace() {
    let tokens = tokenize_line("  rcv b \r", 1);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].position.column, 3);
    assert_eq!(*tokens[1], "b");
}
