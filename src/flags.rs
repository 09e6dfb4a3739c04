//! In-place partitioning of argument lists by flag prefix.
//!
//! A flag-like string starts with `/` or `.`. Note that [`flags_only`] keeps
//! the entries that are *not* flag-like, and [`non_flags_only`] keeps the ones
//! that are; the names describe what gets removed.

/// Returns `true` if `s` starts with `/` or `.`.
pub fn is_flag_like(s: &str) -> bool {
    s.starts_with('/') || s.starts_with('.')
}

/// Removes flag-like entries, keeping everything else (including empty strings).
///
/// # Examples
///
/// ```
/// use destroy_invalids::flags_only;
///
/// let mut args = vec!["/x", ".y", "z", ""];
/// flags_only(&mut args);
/// assert_eq!(args, vec!["z", ""]);
/// ```
pub fn flags_only<S: AsRef<str>>(list: &mut Vec<S>) {
    list.retain(|s| !is_flag_like(s.as_ref()));
}

/// Removes everything except non-empty flag-like entries.
///
/// # Examples
///
/// ```
/// use destroy_invalids::non_flags_only;
///
/// let mut args = vec!["/x".to_string(), ".y".to_string(), "z".to_string(), String::new()];
/// non_flags_only(&mut args);
/// assert_eq!(args, vec!["/x", ".y"]);
/// ```
pub fn non_flags_only<S: AsRef<str>>(list: &mut Vec<S>) {
    list.retain(|s| {
        let s = s.as_ref();
        !s.is_empty() && is_flag_like(s)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_only_keeps_plain_and_empty_entries() {
        let mut list = vec!["/x", ".y", "z", ""];
        flags_only(&mut list);
        assert_eq!(list, vec!["z", ""]);
    }

    #[test]
    fn non_flags_only_keeps_flag_like_entries() {
        let mut list = vec!["/x", ".y", "z", ""];
        non_flags_only(&mut list);
        assert_eq!(list, vec!["/x", ".y"]);
    }

    #[test]
    fn dash_prefix_is_not_flag_like() {
        let mut list = vec!["-EN".to_string(), "/ES".to_string()];
        flags_only(&mut list);
        assert_eq!(list, vec!["-EN"]);
    }

    #[test]
    fn empty_list_stays_empty() {
        let mut list: Vec<String> = Vec::new();
        flags_only(&mut list);
        assert!(list.is_empty());
        non_flags_only(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let mut list = vec!["b", "/1", "a", ".2", "c"];
        flags_only(&mut list);
        assert_eq!(list, vec!["b", "a", "c"]);

        let mut list = vec![".2", "b", "/1"];
        non_flags_only(&mut list);
        assert_eq!(list, vec![".2", "/1"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the two partitions split the list without losing non-empty entries
            #[test]
            fn proptest_partitions_cover_input(
                list in prop::collection::vec("[./]?[a-z]{0,4}", 0..12)
            ) {
                let mut plain = list.clone();
                let mut flagged = list.clone();
                flags_only(&mut plain);
                non_flags_only(&mut flagged);

                prop_assert_eq!(plain.len() + flagged.len(), list.len());
                prop_assert!(plain.iter().all(|s| !is_flag_like(s)));
                prop_assert!(flagged.iter().all(|s| is_flag_like(s)));
            }
        }
    }
}
