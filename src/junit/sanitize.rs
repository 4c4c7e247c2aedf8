/// Whether `c` is a control character that XML 1.0 does not allow.
pub fn is_illegal_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{0008}'
            | '\u{000B}'..='\u{000C}'
            | '\u{000E}'..='\u{001F}'
            | '\u{007F}'..='\u{0084}'
            | '\u{0086}'..='\u{009F}'
    )
}

/// Strip characters that are illegal in XML, leaving everything else as-is.
pub fn sanitize_for_xml(input: &str) -> String {
    input.chars().filter(|c| !is_illegal_xml_char(*c)).collect()
}
