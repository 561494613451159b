use serde::{Deserialize, Serialize};

/// Zone under which names carry an embedded IPv4 address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynthesisConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default)]
    pub ttl: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            ttl: 0,
        }
    }
}

/// Canonical suffix form: lowercase, no leading dot, dot-terminated.
pub fn normalize_suffix(suffix: &str) -> String {
    let trimmed = suffix.trim().trim_start_matches('.').to_ascii_lowercase();
    if trimmed.ends_with('.') {
        trimmed
    } else {
        format!("{}.", trimmed)
    }
}

/// Plain textual suffix test on the lowercased, dot-terminated name.
///
/// No label boundary is required: `1.2.3.4.evilvisibleip.com.` ends with
/// `visibleip.com.`. `suffix` must already be normalized.
pub fn name_ends_with_suffix(name: &str, suffix: &str) -> bool {
    let mut name_lower = name.to_ascii_lowercase();
    if !name_lower.ends_with('.') {
        name_lower.push('.');
    }

    name_lower.ends_with(suffix)
}

fn default_suffix() -> String {
    "visibleip.com.".to_string()
}
