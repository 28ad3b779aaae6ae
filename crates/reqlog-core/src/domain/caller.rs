//! Call-site provenance for log lines

use std::fmt;
use std::panic::Location;
use std::path::{Component, Path, PathBuf};

/// Source location of a logging call, rendered as `path:function:line`.
///
/// The function segment is empty (`path::line`) when only the location is
/// known, so the field always splits into three parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// Source file as recorded by the compiler (`file!()`)
    pub file: &'static str,
    /// Manifest directory of the crate the call was compiled in, used to
    /// make `file` absolute
    pub manifest_dir: Option<&'static str>,
    /// Innermost function name, `None` when only the location is known
    pub function: Option<&'static str>,
    pub line: u32,
}

impl Caller {
    /// Build a caller from a full function path such as
    /// `my_app::handlers::login::{{closure}}`.
    pub fn new(file: &'static str, function_path: &'static str, line: u32) -> Self {
        Self {
            file,
            manifest_dir: None,
            function: Some(short_function_name(function_path)),
            line,
        }
    }

    /// Resolve `file` against the calling crate's `CARGO_MANIFEST_DIR`.
    pub fn in_crate(mut self, manifest_dir: &'static str) -> Self {
        self.manifest_dir = Some(manifest_dir);
        self
    }

    /// Caller from a `#[track_caller]` location; carries no function name
    /// and no manifest directory.
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            manifest_dir: None,
            function: None,
            line: location.line(),
        }
    }

    /// Source path, absolute when the manifest directory is known.
    pub fn path(&self) -> PathBuf {
        match self.manifest_dir {
            Some(dir) => absolute_source_path(dir, self.file),
            None => PathBuf::from(self.file),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.path().display(),
            self.function.unwrap_or(""),
            self.line
        )
    }
}

/// Reduce a qualified function path to its last segment, skipping closure
/// frames.
pub fn short_function_name(path: &str) -> &str {
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or("")
}

/// Join a compiler-recorded source path onto its crate's manifest directory.
///
/// Inside a workspace `file!()` is relative to the workspace root
/// (`crates/core/src/lib.rs`) while the manifest directory ends with
/// `crates/core`; the overlapping components are only joined once. Absolute
/// paths are returned unchanged.
pub fn absolute_source_path(manifest_dir: &str, file: &str) -> PathBuf {
    let file = Path::new(file);
    if file.is_absolute() {
        return file.to_path_buf();
    }

    let root = Path::new(manifest_dir);
    let dir: Vec<Component<'_>> = root.components().collect();
    let rel: Vec<Component<'_>> = file.components().collect();

    let overlap = (1..=dir.len().min(rel.len()))
        .rev()
        .find(|&k| dir[dir.len() - k..] == rel[..k])
        .unwrap_or(0);

    root.join(rel[overlap..].iter().collect::<PathBuf>())
}

/// Full path of the enclosing function, resolved at compile time.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// [`Caller`] for the line where this macro is expanded.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::Caller::new(::std::file!(), $crate::__function_path!(), ::std::line!())
            .in_crate(::std::env!("CARGO_MANIFEST_DIR"))
    };
}
