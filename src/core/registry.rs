use crate::core::PlatformProfile;
use crate::utils::error::{ResolveError, Result};
use crate::utils::validation::Validate;
use std::collections::BTreeMap;

pub const NATIVE: &str = "native";
pub const CROSS_WINDOWS: &str = "cross-windows";

/// Linux graphics/windowing libraries needed by a native GUI build.
const NATIVE_DEPENDENCIES: &[&str] = &[
    "libGL",
    "libX11",
    "libXcursor",
    "libXrandr",
    "libXi",
    "libxkbcommon",
    "wayland",
];

/// MinGW threading runtime for `x86_64-pc-windows-gnu` cross builds.
const CROSS_WINDOWS_DEPENDENCIES: &[&str] = &["pthreads"];

#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, PlatformProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.profiles.insert(
            NATIVE.to_string(),
            PlatformProfile::new(NATIVE, NATIVE_DEPENDENCIES.iter().copied()),
        );
        registry.profiles.insert(
            CROSS_WINDOWS.to_string(),
            PlatformProfile::new(CROSS_WINDOWS, CROSS_WINDOWS_DEPENDENCIES.iter().copied())
                .with_path_variable("LIBRARY_PATH")
                .with_env("CARGO_BUILD_TARGET", "x86_64-pc-windows-gnu"),
        );
        registry
    }

    /// Validates and registers `profile`, replacing any profile with the
    /// same identifier.
    pub fn register(&mut self, profile: PlatformProfile) -> Result<()> {
        profile.validate()?;

        if self.profiles.contains_key(&profile.identifier) {
            tracing::debug!("Overriding profile '{}'", profile.identifier);
        }
        self.profiles.insert(profile.identifier.clone(), profile);
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Result<&PlatformProfile> {
        self.profiles
            .get(identifier)
            .ok_or_else(|| ResolveError::UnknownPlatform {
                identifier: identifier.to_string(),
            })
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
