use weaver_core::Batch;

pub const SYSTEM_PROMPT: &str = "You are an expert AI detective. Respond with valid JSON only.";

const OUTPUT_TEMPLATE: &str = r#"{
  "shadow_id": "string",
  "revealed_truth": {
    "programming_experience": "string",
    "programming_language": "string",
    "skill_mastery": "string",
    "leadership_claims": "string",
    "team_experience": "string",
    "skills and other keywords": ["string", "..."]
  },
  "deception_patterns": [
    {
      "lie_type": "string",
      "contradictory_claims": ["string", "..."]
    }
  ]
}"#;

const OUTPUT_EXAMPLE: &str = r#"{
  "shadow_id": "selene_6",
  "revealed_truth": {
    "programming_experience": "limited",
    "programming_language": "Ruby",
    "skill_mastery": "beginner",
    "leadership_claims": "exaggerated",
    "team_experience": "individual contributor",
    "skills and other keywords": ["Ruby on Rails", "data", "machine learning"]
  },
  "deception_patterns": [
    {
      "lie_type": "experience_inflation",
      "contradictory_claims": ["I'm a seasoned Ruby on Rails developer", "I only took a weekend workshop on this stuff"]
    },
    {
      "lie_type": "leadership_exaggeration",
      "contradictory_claims": ["I'm ready to build your next predictive engine", "My role is more about the Rails integration"]
    }
  ]
}"#;

/// Render the batch's sessions as numbered `Session N:` blocks in batch order.
pub fn render_sessions(batch: &Batch) -> String {
    let mut out = String::new();
    for (i, session) in batch.sessions.iter().enumerate() {
        out.push_str(&format!("Session {}:\n{}\n\n", i + 1, session.content.trim()));
    }
    out
}

/// Build the analysis prompt for one batch. Same batch, same prompt.
pub fn render_prompt(batch: &Batch) -> String {
    let count = batch.sessions.len();
    format!(
        "You are the Truth Weaver, an AI detective.

ANALYSIS TARGET: {group_id}

INSTRUCTIONS:
- Analyze all sessions (Session 1-{count}) carefully
- Detect contradictions, exaggerations, and fabrications
- Extract the most likely truth
- List deception patterns with evidence

TRANSCRIPT DATA:
{sessions}
Return ONLY valid JSON in this structure, filled with data extracted from the transcripts.
Use \"{group_id}\" as the shadow_id.

STRUCTURE:
{OUTPUT_TEMPLATE}

EXAMPLE:
{OUTPUT_EXAMPLE}
",
        group_id = batch.group_id,
        sessions = render_sessions(batch),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use weaver_core::SessionRecord;

    fn batch() -> Batch {
        Batch {
            group_id: "alice_2".into(),
            sessions: (1..=5)
                .map(|i| SessionRecord::new(format!("alice_{}.mp3", i + 5), format!("claim {i}")))
                .collect(),
        }
    }

    #[test]
    fn sessions_are_numbered_in_order() {
        let text = render_sessions(&batch());
        assert!(text.starts_with("Session 1:\nclaim 1\n\nSession 2:\nclaim 2\n\n"));
        let positions: Vec<usize> = (1..=5)
            .map(|i| text.find(&format!("Session {i}:\nclaim {i}")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prompt_names_group_and_schema() {
        let prompt = render_prompt(&batch());
        assert!(prompt.contains("ANALYSIS TARGET: alice_2"));
        assert!(prompt.contains("Use \"alice_2\" as the shadow_id."));
        assert!(prompt.contains("Session 1-5"));
        for field in [
            "programming_experience",
            "programming_language",
            "skill_mastery",
            "leadership_claims",
            "team_experience",
            "skills and other keywords",
            "deception_patterns",
            "lie_type",
            "contradictory_claims",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(render_prompt(&batch()), render_prompt(&batch()));
    }

    #[test]
    fn unit_ids_are_not_leaked_into_prompt() {
        let prompt = render_prompt(&batch());
        assert!(!prompt.contains("alice_6.mp3"));
    }
}
