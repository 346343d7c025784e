//! Prompt assembly: context blocks and the analyst system prompt.

use rival_core::intent::Intent;
use rival_core::models::Passage;

/// Most context blocks embedded in one prompt.
pub const MAX_CONTEXT_BLOCKS: usize = 4;

/// Render retrieved passages into the CONTEXT section.
///
/// Each passage becomes `[Source: <source>]\n<text>\n`; blocks are joined
/// with `\n---\n`, keeping at most [`MAX_CONTEXT_BLOCKS`].
pub fn render_context(passages: &[Passage]) -> String {
    passages
        .iter()
        .take(MAX_CONTEXT_BLOCKS)
        .map(|p| format!("[Source: {}]\n{}\n", p.source, p.text))
        .collect::<Vec<_>>()
        .join("\n---\n")
}

/// Build the full generation prompt from intent, sub-goals, the original
/// query, and the rendered context.
pub fn build_prompt(intent: Intent, goals: &[&str], query: &str, context: &str) -> String {
    let goals_line = goals.join("; ");
    format!(
        "You are a competitive analysis agent. Use the CONTEXT to answer the USER QUERY.\n\
         Return: concise bullet points, then a short recommendation. Cite the competitor names inline when relevant.\n\
         If the intent is 'comparison', explicitly list differentiators. Keep to facts found in CONTEXT.\n\
         \n\
         INTENT: {intent}\n\
         SUB-GOALS: {goals_line}\n\
         USER QUERY: {query}\n\
         \n\
         CONTEXT:\n\
         {context}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(source: &str, text: &str) -> Passage {
        Passage {
            text: text.to_string(),
            score: 1.0,
            source: source.to_string(),
        }
    }

    #[test]
    fn context_blocks_carry_source_attribution() {
        let context = render_context(&[passage("Acme", "makes widgets")]);
        assert_eq!(context, "[Source: Acme]\nmakes widgets\n");
    }

    #[test]
    fn blocks_are_separated_and_capped_at_four() {
        let passages: Vec<_> = (0..6).map(|i| passage(&format!("c{i}"), "text")).collect();
        let context = render_context(&passages);
        assert_eq!(context.matches("\n---\n").count(), 3);
        assert!(context.contains("[Source: c3]"));
        assert!(!context.contains("[Source: c4]"));
    }

    #[test]
    fn empty_passages_render_empty_context() {
        assert_eq!(render_context(&[]), "");
    }

    #[test]
    fn prompt_embeds_every_section() {
        let prompt = build_prompt(
            Intent::Strengths,
            &Intent::Strengths.goal_plan(),
            "What are Acme's strengths?",
            "[Source: Acme]\nwidgets\n",
        );
        assert!(prompt.contains("INTENT: strengths"));
        assert!(prompt.contains("SUB-GOALS: retrieve relevant data; extract strengths; summarize with evidence"));
        assert!(prompt.contains("USER QUERY: What are Acme's strengths?"));
        assert!(prompt.contains("CONTEXT:\n[Source: Acme]"));
        assert!(prompt.contains("explicitly list differentiators"));
    }
}
