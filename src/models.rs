//! Known Bedrock text model identifiers.
//!
//! See <https://docs.aws.amazon.com/bedrock/latest/userguide/model-ids.html>.

/// Amazon Titan Text Express. English only.
pub const TITAN_TEXT_EXPRESS_V1: &str = "amazon.titan-text-express-v1";

/// Anthropic Claude Instant v1.
pub const CLAUDE_INSTANT_V1: &str = "anthropic.claude-instant-v1";

/// Anthropic Claude v2.
pub const CLAUDE_V2: &str = "anthropic.claude-v2";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = CLAUDE_INSTANT_V1;

/// Vendor prefix shared by every Titan text model id.
pub const TITAN_PREFIX: &str = "amazon.titan";

/// Vendor prefix shared by every Claude model id.
pub const CLAUDE_PREFIX: &str = "anthropic.claude";
