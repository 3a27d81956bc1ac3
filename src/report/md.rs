use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::ScoresResult;

pub fn to_markdown(record: &ModelRecord, category: Category, scores: &ScoresResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", record.display_name));
    output.push_str(&format!("Category: {category}\n"));
    output.push_str(&format!("Scheme: {}\n\n", scores.scheme));
    output.push_str(&format!(
        "Overall score: {:.2} ({} Tier, {})\n\n",
        scores.overall_score,
        scores.tier,
        scores.tier.label()
    ));

    output.push_str("## Scores\n\n");
    for &factor in scores.scheme.factors() {
        if let Some(score) = scores.score(factor) {
            output.push_str(&format!("- {factor}: {score:.2}\n"));
        }
    }
    output.push('\n');

    output.push_str("## Tags\n\n");
    if scores.tags.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for tag in &scores.tags {
            output.push_str(&format!(
                "- {} ({}): {}\n",
                tag.tag_name, tag.color_hex, tag.description
            ));
        }
        output.push('\n');
    }

    output.push_str("## Benchmarks\n\n");
    if scores.benchmarks.is_empty() {
        output.push_str("- none\n");
    } else {
        for (name, value) in &scores.benchmarks {
            output.push_str(&format!("- {name}: {value}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::types::scoring::{ScoringConfig, SuppliedScores};

    #[test]
    fn markdown_report_contains_sections() {
        let record = ModelRecord::new("org/model", "Fancy Model");
        let scores = engine::score(
            &record,
            Category::TextGeneration,
            &SuppliedScores::new(),
            &ScoringConfig::default(),
        )
        .expect("scoring should succeed");

        let rendered = to_markdown(&record, Category::TextGeneration, &scores);
        assert!(rendered.contains("# Fancy Model"));
        assert!(rendered.contains("Category: Text Generation"));
        assert!(rendered.contains("Overall score: 56.66 (D Tier, Limited)"));
        assert!(rendered.contains("- freedom: 50.00"));
        assert!(rendered.contains("## Tags"));
        assert!(rendered.contains("- Free (#007bff)"));
        assert!(rendered.contains("## Benchmarks\n\n- none"));
    }
}
