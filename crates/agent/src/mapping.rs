//! Agent-local tool aliases and their gateway-side names.
//!
//! The gateway's function configuration knows some tools by different
//! names than this agent advertises. The table is descriptive metadata for
//! dispatch decisions and display; nothing in the translation path
//! consults it, and an unknown alias is not an error.

/// Alias and remote-name pairs.
const TOOL_NAME_MAPPING: &[(&str, &str)] = &[
    ("math_solver", "calculator"),
    ("weather_info", "get_weather"),
    ("docs_search", "search_docs"),
];

/// The gateway-side name for an agent-local alias.
pub fn remote_name(alias: &str) -> Option<&'static str> {
    TOOL_NAME_MAPPING
        .iter()
        .find(|(local, _)| *local == alias)
        .map(|(_, remote)| *remote)
}

/// The agent-local alias for a gateway-side name.
pub fn alias_for(remote: &str) -> Option<&'static str> {
    TOOL_NAME_MAPPING
        .iter()
        .find(|(_, name)| *name == remote)
        .map(|(local, _)| *local)
}
