#[inline]
pub fn is_word_char(c: char) -> bool {
    // Barewords may carry non-ASCII letters (category names are Chinese).
    c.is_alphanumeric() || c == '_'
}

#[inline]
pub fn is_open_delim(c: char) -> bool {
    matches!(c, '{' | '[')
}

#[inline]
pub fn is_close_delim(c: char) -> bool {
    matches!(c, '}' | ']')
}
