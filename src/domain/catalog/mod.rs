//! Projects, packages and releases

mod package;
mod project;
mod release;

pub use package::{Package, PackageKind};
pub use project::Project;
pub use release::{latest_release, Release};
