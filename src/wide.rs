//! UTF-16 conversion for Win32 string parameters.

/// NUL-terminated UTF-16 copy of `s`. The returned buffer must outlive
/// the call the pointer is handed to.
pub(crate) fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(Some(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_nul_terminated() {
        let wide = to_wide("Spooler");
        assert_eq!(wide.len(), 8);
        assert_eq!(wide.last(), Some(&0));
        assert_eq!(wide[0], u16::from(b'S'));
    }

    #[test]
    fn empty_string_is_a_lone_nul() {
        assert_eq!(to_wide(""), vec![0]);
    }
}
