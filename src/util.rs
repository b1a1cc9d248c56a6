/// Whether `value` can be placed in a query string without percent-encoding.
///
/// `+` is excluded: form decoders read it as a space.
pub(crate) fn is_query_safe(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'-'
                    | b'.'
                    | b'_'
                    | b'~'
                    | b'!'
                    | b'$'
                    | b'\''
                    | b'('
                    | b')'
                    | b'*'
                    | b','
                    | b';'
                    | b':'
                    | b'@'
                    | b'/'
                    | b'?'
            )
        })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
