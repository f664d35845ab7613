//! Compiler-specific reference-map rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::ToolError;
use crate::resolver::ModmapEntry;

/// Compilers with distinct module reference syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compiler {
    Clang,
    Gcc,
    MsvcCl,
}

impl FromStr for Compiler {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clang" => Ok(Compiler::Clang),
            "gcc" => Ok(Compiler::Gcc),
            "msvc-cl" => Ok(Compiler::MsvcCl),
            other => Err(ToolError::UnknownCompiler(other.to_string())),
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compiler::Clang => "clang",
            Compiler::Gcc => "gcc",
            Compiler::MsvcCl => "msvc-cl",
        };
        write!(f, "{}", name)
    }
}

/// Renders the modmap and the artifact input list for a resolved entry set.
///
/// Returns `(modmap_text, input_list_text)`: one reference line per entry
/// in the modmap, one artifact path per line in the input list. The input
/// list is compiler-independent; the build system records it as the set of
/// dependency inputs for the compile action.
pub fn render(entries: &[ModmapEntry], compiler: Compiler) -> (String, String) {
    let mut modmap = String::new();
    let mut inputs = String::new();

    for entry in entries {
        let line = match compiler {
            Compiler::Clang => format!("-fmodule-file={}={}\n", entry.name, entry.path),
            Compiler::Gcc => format!("{} {}\n", entry.name, entry.path),
            Compiler::MsvcCl => format!("/reference {}={}\n", entry.name, entry.path),
        };
        modmap.push_str(&line);
        inputs.push_str(&entry.path);
        inputs.push('\n');
    }

    (modmap, inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, path: &str) -> ModmapEntry {
        ModmapEntry {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_clang_format() {
        let (modmap, inputs) = render(&[entry("Foo", "/out/foo.pcm")], Compiler::Clang);

        assert_eq!(modmap, "-fmodule-file=Foo=/out/foo.pcm\n");
        assert_eq!(inputs, "/out/foo.pcm\n");
    }

    #[test]
    fn test_gcc_format() {
        let (modmap, inputs) = render(&[entry("Foo", "/out/foo.pcm")], Compiler::Gcc);

        assert_eq!(modmap, "Foo /out/foo.pcm\n");
        assert_eq!(inputs, "/out/foo.pcm\n");
    }

    #[test]
    fn test_msvc_format() {
        let (modmap, inputs) = render(&[entry("Foo", "/out/foo.pcm")], Compiler::MsvcCl);

        assert_eq!(modmap, "/reference Foo=/out/foo.pcm\n");
        assert_eq!(inputs, "/out/foo.pcm\n");
    }

    #[test]
    fn test_empty_entries() {
        let (modmap, inputs) = render(&[], Compiler::Clang);

        assert!(modmap.is_empty());
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_multiple_entries_keep_order() {
        let entries = [entry("a", "/out/a.pcm"), entry("b", "/out/b.pcm")];
        let (modmap, inputs) = render(&entries, Compiler::Gcc);

        assert_eq!(modmap, "a /out/a.pcm\nb /out/b.pcm\n");
        assert_eq!(inputs, "/out/a.pcm\n/out/b.pcm\n");
    }

    #[test]
    fn test_parse_compiler() {
        assert_eq!("clang".parse::<Compiler>().unwrap(), Compiler::Clang);
        assert_eq!("gcc".parse::<Compiler>().unwrap(), Compiler::Gcc);
        assert_eq!("msvc-cl".parse::<Compiler>().unwrap(), Compiler::MsvcCl);
    }

    #[test]
    fn test_parse_unknown_compiler() {
        let result = "tcc".parse::<Compiler>();

        assert_eq!(result, Err(ToolError::UnknownCompiler("tcc".to_string())));
    }
}
