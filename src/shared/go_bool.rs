/// Parses a boolean the way Go's `strconv.ParseBool` does.
///
/// Used for the `{{.Standard}}` field of `go list` output and for the
/// `-b=<bool>`/`-s=<bool>` flags, which follow Go's flag package.
pub fn parse_go_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
