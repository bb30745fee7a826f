use amundsen_core::Outcome;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Maps a lookup outcome onto a tool result.
///
/// Found data is returned as JSON, an empty lookup as its sentinel text, and a
/// failed lookup as an `is_error` result carrying `{"error": ...}`.
pub fn outcome_result<T: Serialize>(outcome: Outcome<T>) -> Result<CallToolResult, ErrorData> {
    match outcome {
        Outcome::Found(value) => Ok(CallToolResult::success(vec![Content::json(value)?])),
        Outcome::Empty(reason) => Ok(CallToolResult::success(vec![Content::text(
            reason.message(),
        )])),
        Outcome::Failed(err) => Ok(CallToolResult::error(vec![Content::json(
            err.to_payload(),
        )?])),
    }
}
