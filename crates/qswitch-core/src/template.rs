//! Replacement templates with back-references.
//!
//! Rule templates follow the replacement conventions users already know from
//! editor configuration files, which differ from `regex`'s own `$name` syntax:
//!
//! | Token      | Inserts                                      |
//! |------------|----------------------------------------------|
//! | `$$`       | a literal `$`                                |
//! | `$&`       | the whole match                              |
//! | `` $` ``   | the text before the match                    |
//! | `$'`       | the text after the match                     |
//! | `$1`-`$99` | a numbered capture group (empty if unmatched) |
//! | `$<name>`  | a named capture group (empty if unmatched)   |
//!
//! `$1a` is group 1 followed by `a` (the `regex` crate would read it as a
//! group named `1a`). References to groups that do not exist stay literal,
//! `$<name>` included, even when the pattern has other named groups.

use regex::{Captures, Regex};

/// Replace the first match of `regex` in `haystack` with `template`.
///
/// Returns `haystack` unchanged when there is no match.
pub fn replace_first(regex: &Regex, haystack: &str, template: &str) -> String {
    let Some(caps) = regex.captures(haystack) else {
        return haystack.to_string();
    };
    let Some(whole) = caps.get(0) else {
        return haystack.to_string();
    };

    let mut out = String::with_capacity(haystack.len() + template.len());
    out.push_str(&haystack[..whole.start()]);
    expand_into(regex, &caps, haystack, template, &mut out);
    out.push_str(&haystack[whole.end()..]);
    out
}

/// Expand `template` for one match, appending the result to `out`.
fn expand_into(
    regex: &Regex,
    caps: &Captures<'_>,
    haystack: &str,
    template: &str,
    out: &mut String,
) {
    let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
    let group_count = caps.len() - 1;
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < template.len() {
        let Some(offset) = template[i..].find('$') else {
            out.push_str(&template[i..]);
            break;
        };
        out.push_str(&template[i..i + offset]);
        i += offset;

        // `i` now points at a '$'
        let next = bytes.get(i + 1).copied();
        match next {
            Some(b'$') => {
                out.push('$');
                i += 2;
            }
            Some(b'&') => {
                out.push_str(&haystack[whole.0..whole.1]);
                i += 2;
            }
            Some(b'`') => {
                out.push_str(&haystack[..whole.0]);
                i += 2;
            }
            Some(b'\'') => {
                out.push_str(&haystack[whole.1..]);
                i += 2;
            }
            Some(d) if d.is_ascii_digit() => {
                match numbered_reference(bytes, i + 1, group_count) {
                    Some((group, len)) => {
                        if let Some(m) = caps.get(group) {
                            out.push_str(m.as_str());
                        }
                        i += 1 + len;
                    }
                    None => {
                        out.push('$');
                        i += 1;
                    }
                }
            }
            Some(b'<') => match named_reference(regex, template, i + 2) {
                Some((name, end)) => {
                    if let Some(m) = caps.name(name) {
                        out.push_str(m.as_str());
                    }
                    i = end;
                }
                None => {
                    out.push('$');
                    i += 1;
                }
            },
            _ => {
                out.push('$');
                i += 1;
            }
        }
    }
}

/// Parse a one- or two-digit group reference starting at `start`.
///
/// Two digits win when they name an existing group; `$0` is not a reference.
fn numbered_reference(bytes: &[u8], start: usize, group_count: usize) -> Option<(usize, usize)> {
    let first = (bytes.get(start)? - b'0') as usize;
    if let Some(second) = bytes.get(start + 1).filter(|b| b.is_ascii_digit()) {
        let two = first * 10 + (second - b'0') as usize;
        if (1..=group_count).contains(&two) {
            return Some((two, 2));
        }
    }
    if (1..=group_count).contains(&first) {
        Some((first, 1))
    } else {
        None
    }
}

/// Parse `<name>` starting after the `<`; returns the name and the index past `>`.
fn named_reference<'t>(
    regex: &Regex,
    template: &'t str,
    start: usize,
) -> Option<(&'t str, usize)> {
    let close = template.get(start..)?.find('>')?;
    let name = &template[start..start + close];
    let known = regex.capture_names().flatten().any(|n| n == name);
    known.then_some((name, start + close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_numbered_group() {
        let result = replace_first(&re(r"(.*)\.ts$"), "/proj/src/foo.ts", "$1.test.ts");
        assert_eq!(result, "/proj/src/foo.test.ts");
    }

    #[test]
    fn test_group_followed_by_letters() {
        let result = replace_first(&re(r"(\w+)\.rs$"), "lib.rs", "$1a.rs");
        assert_eq!(result, "liba.rs");
    }

    #[test]
    fn test_only_first_match_is_replaced() {
        let result = replace_first(&re("src"), "/src/app/src/main.rs", "test");
        assert_eq!(result, "/test/app/src/main.rs");
    }

    #[test]
    fn test_unanchored_keeps_surrounding_text() {
        let result = replace_first(&re(r"\.h$"), "/proj/include/foo.h", ".cpp");
        assert_eq!(result, "/proj/include/foo.cpp");
    }

    #[test]
    fn test_special_tokens() {
        let regex = re("foo");
        assert_eq!(replace_first(&regex, "a/foo/b", "[$&]"), "a/[foo]/b");
        assert_eq!(replace_first(&regex, "a/foo/b", "$$"), "a/$/b");
        assert_eq!(replace_first(&regex, "a/foo/b", "$`"), "a/a//b");
        assert_eq!(replace_first(&regex, "a/foo/b", "$'"), "a//b/b");
    }

    #[test]
    fn test_named_group() {
        let regex = re(r"(?<stem>[^/]+)\.tsx$");
        let result = replace_first(&regex, "/ui/Button.tsx", "$<stem>.stories.tsx");
        assert_eq!(result, "/ui/Button.stories.tsx");
    }

    #[test]
    fn test_unknown_references_stay_literal() {
        let regex = re(r"(a)");
        assert_eq!(replace_first(&regex, "a", "$2"), "$2");
        assert_eq!(replace_first(&regex, "a", "$0"), "$0");
        assert_eq!(replace_first(&regex, "a", "$<nope>"), "$<nope>");
        assert_eq!(replace_first(&regex, "a", "$x"), "$x");
        assert_eq!(replace_first(&regex, "a", "end$"), "end$");
    }

    #[test]
    fn test_unknown_name_beside_named_groups_stays_literal() {
        let regex = re(r"(?<dir>.*)/(?<stem>[^/.]+)\.tsx$");
        assert_eq!(
            replace_first(&regex, "/ui/Button.tsx", "$<dir>/$<stme>.test.tsx"),
            "/ui/$<stme>.test.tsx"
        );
    }

    #[test]
    fn test_two_digit_group_falls_back_to_one_digit() {
        // Only one group: `$12` is group 1 followed by "2"
        let result = replace_first(&re(r"(x)"), "x", "$12");
        assert_eq!(result, "x2");
    }

    #[test]
    fn test_unmatched_optional_group_is_empty() {
        let result = replace_first(&re(r"(a)?b"), "b", "[$1]");
        assert_eq!(result, "[]");
    }

    #[test]
    fn test_no_match_returns_input() {
        let result = replace_first(&re(r"\.go$"), "/proj/main.rs", "_test.go");
        assert_eq!(result, "/proj/main.rs");
    }
}
