//! A stand-in `go` binary for end-to-end runs.
//!
//! The script answers the three `go list` invocations godi makes for a
//! small module `example.com/app`:
//!
//! - direct imports: `example.com/app/internal/store`, `fmt`, `os`
//! - transitive deps: `errors`, the store sub-package, `fmt`,
//!   `github.com/lib/pq`, `io`, `os`
//!
//! `.` lists the same module as `example.com/app`. `unsafe` lists with no
//! dependencies; any other package fails the way
//! `go list` does for a missing package.

use std::path::{Path, PathBuf};

pub const FAKE_GO_SCRIPT: &str = r#"#!/bin/sh
if [ "$1" != "list" ]; then
    echo "go $1: unknown command" >&2
    exit 2
fi
shift
case "$1" in
    -json)
        case "$2" in
            .|example.com/app)
                cat <<'JSON'
{
	"Dir": "/src/example.com/app",
	"ImportPath": "example.com/app",
	"Name": "main",
	"Imports": [
		"example.com/app/internal/store",
		"fmt",
		"os"
	],
	"Deps": [
		"errors",
		"example.com/app/internal/store",
		"fmt",
		"github.com/lib/pq",
		"io",
		"os"
	]
}
JSON
                ;;
            unsafe)
                echo '{"ImportPath": "unsafe", "Name": "unsafe", "Standard": true}'
                ;;
            *)
                echo "can't load package: package $2: cannot find package \"$2\"" >&2
                exit 1
                ;;
        esac
        ;;
    -f)
        shift 2
        for p in "$@"; do
            case "$p" in
                example.com/app/internal/store) echo "store:false" ;;
                github.com/lib/pq) echo "pq:false" ;;
                *) echo "${p##*/}:true" ;;
            esac
        done
        ;;
    "")
        echo "example.com/app"
        ;;
esac
"#;

/// Writes the fake `go` script into `dir` and returns its path
#[cfg(unix)]
pub fn install(dir: &Path) -> PathBuf {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("go");
    fs::write(&path, FAKE_GO_SCRIPT).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
