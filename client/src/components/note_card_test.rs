use super::*;

#[test]
fn short_body_is_kept_whole() {
    assert_eq!(excerpt("  Call back Friday.  ", 40), "Call back Friday.");
}

#[test]
fn long_body_is_cut_on_a_char_boundary() {
    assert_eq!(excerpt("Strong systems background", 6), "Strong…");
    assert_eq!(excerpt("héllo wörld", 7), "héllo w…");
}

#[test]
fn exact_length_body_is_not_ellipsized() {
    assert_eq!(excerpt("abcdef", 6), "abcdef");
}
