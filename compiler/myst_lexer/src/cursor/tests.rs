use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
}

#[test]
fn advance_moves_by_whole_characters() {
    let mut cursor = Cursor::new("é😀x");
    assert_eq!(cursor.advance(), Some('é'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.advance(), Some('😀'));
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn advance_at_eof_returns_none() {
    let mut cursor = Cursor::new("a");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn previous_looks_behind() {
    let mut cursor = Cursor::new("a.b");
    assert_eq!(cursor.previous(), None);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.previous(), Some('.'));
}

#[test]
fn peek_nth_counts_characters() {
    let cursor = Cursor::new("0x1F");
    assert_eq!(cursor.peek(), Some('x'));
    assert_eq!(cursor.peek_nth(3), Some('F'));
    assert_eq!(cursor.peek_nth(4), None);
}

#[test]
fn eat_while_reports_bytes() {
    let mut cursor = Cursor::new("abc123 rest");
    let eaten = cursor.eat_while(|c| c.is_ascii_alphanumeric());
    assert_eq!(eaten, 6);
    assert_eq!(cursor.slice_from(0), "abc123");
}

#[test]
fn eat_while_to_end_of_input() {
    let mut cursor = Cursor::new("   ");
    cursor.eat_while(|c| c == ' ');
    assert!(cursor.is_eof());
}

// === Lookahead ===

#[test]
fn lookahead_does_not_move_read_position() {
    let mut cursor = Cursor::new("@@x");
    assert_eq!(cursor.look_ahead(), Some('@'));
    assert_eq!(cursor.look_ahead(), Some('@'));
    assert_eq!(cursor.look_ahead(), Some('x'));
    assert_eq!(cursor.look_ahead(), None);
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), Some('@'));
}

#[test]
fn reset_lookahead_returns_to_read_position() {
    let mut cursor = Cursor::new("abc");
    cursor.look_ahead();
    cursor.look_ahead();
    cursor.reset_lookahead();
    assert_eq!(cursor.look_ahead(), Some('a'));
}

// === Fast Skips ===

#[test]
fn eat_until_line_end_stops_before_terminator() {
    let mut cursor = Cursor::new("# note\r\nnext");
    cursor.eat_until_line_end();
    assert_eq!(cursor.slice_from(0), "# note");
    assert_eq!(cursor.current(), Some('\r'));
}

#[test]
fn eat_until_line_end_without_terminator_reaches_eof() {
    let mut cursor = Cursor::new("-- tail");
    cursor.eat_until_line_end();
    assert!(cursor.is_eof());
}

#[test]
fn eat_through_finds_block_end() {
    let mut cursor = Cursor::new("/* a */b");
    assert!(cursor.eat_through("*/"));
    assert_eq!(cursor.current(), Some('b'));
}

#[test]
fn eat_through_missing_needle_leaves_cursor() {
    let mut cursor = Cursor::new("/* open");
    assert!(!cursor.eat_through("*/"));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_until_either_skips_multibyte_text() {
    let mut cursor = Cursor::new("héllo\\'x");
    assert!(cursor.eat_until_either(b'\'', b'\\'));
    assert_eq!(cursor.current(), Some('\\'));
}
