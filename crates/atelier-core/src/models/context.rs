//! Caller-supplied request context.

use serde::{Deserialize, Serialize};

/// What the caller knows about the current editing session.
///
/// `user_intent` is the free-text intent that gates model enrichment:
/// without it the orchestrator answers synchronously from static analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    pub user_intent: Option<String>,
    pub component_id: Option<String>,
    pub component_type: Option<String>,
    /// Design tool the snapshot came from (e.g. "figma"). Feeds
    /// platform-specific keyword classification.
    pub platform: Option<String>,
}
