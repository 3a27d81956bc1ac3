use crate::types::scoring::ScoresResult;

pub fn to_json(scores: &ScoresResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scores)
}
