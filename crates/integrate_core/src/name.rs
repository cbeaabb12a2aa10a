//! Identifier grammar shared by extension and task names.
//!
//! Names are lowercase ASCII alphanumerics with `.`, `_`, or `-` as
//! separators. Separators must not lead, trail, or repeat.

/// Checks one identifier against the shared name grammar.
pub fn is_well_formed(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if is_separator(bytes[0]) || is_separator(bytes[bytes.len() - 1]) {
        return false;
    }

    let mut previous_was_separator = false;
    for &byte in bytes {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() {
            previous_was_separator = false;
        } else if is_separator(byte) {
            if previous_was_separator {
                return false;
            }
            previous_was_separator = true;
        } else {
            return false;
        }
    }
    true
}

fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b'_' || byte == b'-'
}

#[cfg(test)]
mod tests {
    use super::is_well_formed;

    #[test]
    fn accepts_plain_and_separated_names() {
        assert!(is_well_formed("integrate"));
        assert!(is_well_formed("builtin.tasks.shell"));
        assert!(is_well_formed("db-migrate_v2"));
        assert!(is_well_formed("0catalog"));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(!is_well_formed(""));
    }

    #[test]
    fn rejects_uppercase_and_whitespace() {
        assert!(!is_well_formed("Integrate"));
        assert!(!is_well_formed("my tasks"));
        assert!(!is_well_formed("tab\tname"));
    }

    #[test]
    fn rejects_misplaced_separators() {
        assert!(!is_well_formed(".integrate"));
        assert!(!is_well_formed("integrate."));
        assert!(!is_well_formed("integrate..tasks"));
        assert!(!is_well_formed("integrate-_tasks"));
    }
}
