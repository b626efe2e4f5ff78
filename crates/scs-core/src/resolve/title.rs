//! Display title derivation from the filename convention.

/// Derives a display title from a file name.
///
/// Takes the second `'_'`-separated segment and cuts it at the first `'.'`
/// (dropping the file extension). A missing or empty segment yields
/// `default_title`.
///
/// - `"CORP_JohnDoe.png"` → `"JohnDoe"`
/// - `"ART_HOME_1.jpg"` → `"HOME"`
/// - `"plain.jpg"` → the default title
pub(super) fn derive_title(name: &str, default_title: &str) -> String {
    let segment = name
        .split('_')
        .nth(1)
        .and_then(|s| s.split('.').next())
        .unwrap_or("");
    if segment.is_empty() {
        default_title.to_string()
    } else {
        segment.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_segment_without_extension() {
        assert_eq!(derive_title("CORP_JohnDoe.png", "Untitled"), "JohnDoe");
        assert_eq!(derive_title("PORT_Jane.png", "Untitled"), "Jane");
    }

    #[test]
    fn multi_segment_names_take_the_second() {
        assert_eq!(derive_title("ART_HOME_1.jpg", "Untitled"), "HOME");
        assert_eq!(derive_title("ART_Retrato_casal.jpg", "Untitled"), "Retrato");
    }

    #[test]
    fn no_separator_falls_back() {
        assert_eq!(derive_title("plain.jpg", "Untitled"), "Untitled");
        assert_eq!(derive_title("", "Untitled"), "Untitled");
    }

    #[test]
    fn empty_segment_falls_back() {
        assert_eq!(derive_title("ART_.jpg", "Untitled"), "Untitled");
        assert_eq!(derive_title("ART__x.jpg", "Untitled"), "Untitled");
    }
}
