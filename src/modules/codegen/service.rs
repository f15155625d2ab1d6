use crate::state::AppState;
use anyhow::{Context, Result};

/// Authoring rules prepended to every generation request. The generated
/// class must derive from `Scene` for the render pipeline to pick it up.
const PROMPT_GUIDELINES: &str = r#"You are an expert in Manim (Mathematical Animation Engine) and data structures/algorithms.
Generate clean, working Manim code that visualizes the requested algorithm or data structure.

Requirements:
- Use Manim Community and Manim DSA Edition syntax
- Use ONLY standard Manim imports (from manim import *)
- DO NOT use manim_dsa or any external visualization libraries
- Include proper imports from manim
- Create a Scene class that inherits from Scene
- Add clear animations and visual representations
- Include comments explaining key steps
- Make sure the code is executable
- Use basic Manim objects like Rectangle, Circle, Text, VGroup, Arrow for visualizations
- AVOID complex LaTeX formulas - use simple Text objects instead of MathTex when possible
- If you need mathematical notation, use simple Tex() instead of complex MathTex()

Algorithm Visualization Guidelines:
- Implement the COMPLETE algorithm with proper logic and steps
- Use proper spacing to avoid overlapping elements (minimum 1.5 units between objects)
- Position elements clearly: arrays horizontally, trees with proper hierarchy
- Use consistent color coding: RED for current/active elements, GREEN for sorted/final, BLUE for comparisons
- Add step-by-step animations with self.wait(0.5) between major operations
- Show indices, pointers, and current operations clearly
- Include a title describing the current operation
- Use VGroup to organize related elements and move them together
- Scale elements appropriately (scale=0.8 for text, 0.7 for small elements)
- Position elements within the visible frame: use UP*2, DOWN*2, LEFT*3, RIGHT*3 for positioning
- For sorting algorithms: show comparisons, swaps, and final sorted state
- For search algorithms: highlight the search process and found/not found states
- For tree/graph algorithms: show node visits, path highlighting, and traversal order
- Always complete the algorithm - don't stop halfway through
- Add a final state showing the completed result

Spacing and Layout Best Practices:
- Arrays: space elements 1.2 units apart horizontally
- Text labels: position 0.5 units above/below related elements
- Multiple rows: space 2 units apart vertically
- Pointers/arrows: use proper start and end points to avoid overlap
- Use self.arrange() for VGroups to auto-space elements"#;

pub struct CodegenService;

impl CodegenService {
    pub async fn generate(state: AppState, prompt: String) -> Result<String> {
        let full_prompt = build_prompt(&prompt);

        state
            .llm
            .generate_content(&full_prompt)
            .await
            .context("Failed to generate Manim code")
    }
}

fn build_prompt(user_prompt: &str) -> String {
    format!(
        "{PROMPT_GUIDELINES}\n\nUser request: {user_prompt}\n\nRespond with only the Python code, no explanations:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_user_request() {
        let prompt = build_prompt("visualize quicksort on [3, 1, 2]");
        assert!(prompt.contains("User request: visualize quicksort on [3, 1, 2]"));
        assert!(prompt.contains("inherits from Scene"));
        assert!(prompt.ends_with("no explanations:"));
    }
}
