pub fn valid_characters_in_name(c: &char) -> bool {
    c.is_ascii_alphanumeric() || c.eq(&'-') || c.eq(&'_') || c.eq(&'.') || c.eq(&' ')
}

pub fn valid_start_and_end_of_a_name(string: &str) -> bool {
    let invalid_begin_end_chars = ['_', '-', ' '];
    for char in invalid_begin_end_chars {
        if string.starts_with(char) || string.ends_with(char) {
            return false
        }
    }
    true
}
