use tutor_core::entities::AnswerInput;

/// Split `type:id` entries into co-indexed id and type sequences.
pub fn parse_entries(entries: &[String]) -> anyhow::Result<(Vec<String>, Vec<String>)> {
    let mut ids = Vec::with_capacity(entries.len());
    let mut types = Vec::with_capacity(entries.len());
    for entry in entries {
        let (tag, id) = entry
            .split_once(':')
            .filter(|(tag, id)| !tag.is_empty() && !id.is_empty())
            .ok_or_else(|| anyhow::anyhow!("invalid entry '{entry}': expected <type>:<id>"))?;
        ids.push(id.to_string());
        types.push(tag.to_string());
    }
    Ok((ids, types))
}

/// Read a candidate answer. Valid JSON booleans, numbers and strings keep
/// their kind; anything else is text.
pub fn parse_answer(raw: &str) -> AnswerInput {
    serde_json::from_str(raw).unwrap_or_else(|_| AnswerInput::Text(raw.to_string()))
}
