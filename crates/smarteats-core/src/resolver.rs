use smarteats_types::IconResult;

/// Maps a dish to something renderable. Implementations must be total and
/// deterministic: the same input always yields the same result.
pub trait IconResolver: Send + Sync {
    /// Icon set identifier ("openmoji", ...)
    fn icon_set(&self) -> &str;

    /// Resolve a dish name and optional category label
    fn resolve(&self, dish_name: &str, category: Option<&str>) -> IconResult;
}
