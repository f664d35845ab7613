//! # modtool-core
//!
//! Module dependency resolution and modmap emission for C++20 module builds.
//!
//! A modules-aware build runs in two phases: a scanning phase writes a
//! per-unit ddi (dependency descriptor) naming the module the unit provides
//! and the modules it directly requires; the compile phase then needs a
//! reference map (modmap) covering every module the unit transitively
//! depends on. This crate decodes ddi files, maintains the aggregated
//! module registry, computes transitive closures and renders the
//! compiler-specific modmap plus the artifact input list the build system
//! uses for dependency tracking.

pub mod ddi;
pub mod error;
pub mod modmap;
pub mod registry;
pub mod resolver;

pub use ddi::ModuleDep;
pub use error::{ToolError, ToolResult};
pub use modmap::{render, Compiler};
pub use registry::ModulesInfo;
pub use resolver::{resolve, ModmapEntry};
