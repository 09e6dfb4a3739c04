//! Shared proptest strategies.

use proptest::prelude::*;

/// Mixed text: ASCII words, punctuation, spaces and some non-ASCII letters.
pub(crate) fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 _.,!/-]{0,24}").unwrap(),
        prop::string::string_regex("[0-9.]{0,12}").unwrap(),
        any::<String>(),
    ]
}
