//! Icon-name lookup for packages and release artifacts.

use crate::domain::PackageKind;

/// Fallback icon for anything without a dedicated one.
pub const GENERIC_ICON: &str = "package";

pub fn icon_for_package_kind(kind: PackageKind) -> &'static str {
    match kind {
        PackageKind::Npm => "npm",
        PackageKind::Maven => "maven",
        PackageKind::Pypi => "python",
        PackageKind::Docker => "docker",
        PackageKind::Cargo => "rust",
        PackageKind::Nuget => "nuget",
        PackageKind::Helm => "helm",
        PackageKind::Generic => GENERIC_ICON,
    }
}

/// Pick an icon from an artifact file name's extension.
pub fn icon_for_file_name(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
        return "archive";
    }

    let Some((_, ext)) = lower.rsplit_once('.') else {
        return "file";
    };

    match ext {
        "zip" | "gz" | "bz2" | "xz" | "7z" | "rar" | "tar" => "archive",
        "jar" | "war" | "ear" => "java",
        "whl" => "python",
        "crate" => "rust",
        "nupkg" => "nuget",
        "exe" | "msi" | "dmg" | "deb" | "rpm" | "apk" | "appimage" => "installer",
        "json" | "yaml" | "yml" | "toml" | "xml" => "config",
        "md" | "txt" | "pdf" => "document",
        "png" | "jpg" | "jpeg" | "gif" | "svg" => "image",
        _ => "file",
    }
}
