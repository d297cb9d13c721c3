use serde::{Deserialize, Serialize};

const PROBE_PROMPT: &str = "Hello";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    Validate,
    GenerateIdeas,
    GenerateSolution,
}

impl Template {
    pub fn render(&self, input: &str) -> String {
        match self {
            Template::Validate => PROBE_PROMPT.to_string(),
            Template::GenerateIdeas => format!(
                "Generate 3 unique app ideas based on the following prompt: {}. Provide a short description for each idea.",
                input
            ),
            Template::GenerateSolution => format!(
                "Given the problem: \"{}\", suggest a single app idea that addresses this problem and provide a very brief prompt to create it.",
                input
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub template: Template,
    pub input: String,
}

impl GenerationRequest {
    pub fn new(template: Template, input: &str) -> Self {
        Self {
            template,
            input: input.to_string(),
        }
    }

    pub fn probe() -> Self {
        Self::new(Template::Validate, "")
    }

    pub fn prompt(&self) -> String {
        self.template.render(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideas_template_interpolates_input() {
        let req = GenerationRequest::new(Template::GenerateIdeas, "fitness for cats");
        assert_eq!(
            req.prompt(),
            "Generate 3 unique app ideas based on the following prompt: fitness for cats. Provide a short description for each idea."
        );
    }

    #[test]
    fn solution_template_quotes_problem() {
        let req = GenerationRequest::new(Template::GenerateSolution, "I forget to water plants");
        assert!(req.prompt().starts_with("Given the problem: \"I forget to water plants\", suggest"));
    }

    #[test]
    fn probe_ignores_input() {
        assert_eq!(GenerationRequest::probe().prompt(), "Hello");
        assert_eq!(Template::Validate.render("anything"), "Hello");
    }
}
