// src/reference/mod.rs - Read-only lookups against official master data
pub mod catalog;
pub mod data;
mod model_colors;

/// Official names for options and colors. Implementations are immutable for the
/// duration of a normalization pass and are shared across worker threads.
///
/// Every lookup is total: when nothing matches, the input comes back unchanged
/// (or `None` for garnish, where "no match" changes the caller's behavior).
pub trait ReferenceLookup: Sync {
    /// Official option name for a cleaned option fragment.
    fn lookup_option(&self, name: &str) -> String;

    /// True when `name` already is an official option name.
    fn is_official_option(&self, name: &str) -> bool;

    /// Official exterior color, preferring the colors offered for `model`.
    fn lookup_ext_color_for_model(&self, color: &str, model: &str) -> String;

    /// Official interior color, preferring the colors offered for `model`.
    fn lookup_int_color_for_model(&self, color: &str, model: &str) -> String;

    /// Official garnish name for `model`, if the model has a unique match.
    fn lookup_garnish_for_model(&self, garnish: &str, model: &str) -> Option<String>;

    /// True when `name` is an official color name of any model.
    fn is_known_color_name(&self, name: &str) -> bool;
}
