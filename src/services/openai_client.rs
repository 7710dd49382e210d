use anyhow::Context;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};

use crate::configuration::OpenaiSettings;

const SCORECARD_RUBRIC: &str = "
You are a content auditor evaluating SEO visibility for Large Language Models (LLMs). Review the following webpage content and score it (0 = No, 1 = Yes) for the 10 criteria below:

1. Title follows prompt style
2. Clear intro that answers query
3. Structured subheadings
4. Includes FAQs
5. Uses bullets or lists
6. Author/source/credibility present
7. Schema markup present
8. Conversational tone
9. LLM-friendly (likely to be summarized)
10. Recently updated

Respond with a JSON object including the URL and the 10 binary scores plus total.

Webpage content:
";

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    truncation_limit: usize,
}

impl OpenaiClient {
    pub fn new(settings: OpenaiSettings) -> Self {
        let config = OpenAIConfig::new().with_api_key(settings.api_key);

        OpenaiClient {
            client: Client::with_config(config),
            model: settings.model,
            temperature: settings.temperature,
            truncation_limit: settings.truncation_limit,
        }
    }

    // The url is logged for traceability only; the prompt carries the rubric
    // and the page text, and asks the model to echo the url it can infer.
    pub async fn generate_scorecard(&self, content: &str, url: &str) -> anyhow::Result<String> {
        let prompt = build_scorecard_prompt(content, self.truncation_limit);
        log::info!(
            "Requesting scorecard for {} with {} prompt chars",
            url,
            prompt.chars().count()
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .temperature(self.temperature)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let reply = response
            .choices
            .first()
            .context("No choices in Openai response")?
            .message
            .content
            .clone()
            .context("No content")?;

        Ok(reply)
    }
}

fn build_scorecard_prompt(content: &str, limit: usize) -> String {
    format!("{}{}", SCORECARD_RUBRIC, truncate_to_char_budget(content, limit))
}

fn truncate_to_char_budget(content: &str, limit: usize) -> &str {
    match content.char_indices().nth(limit) {
        Some((boundary, _)) => &content[..boundary],
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::{build_scorecard_prompt, truncate_to_char_budget, SCORECARD_RUBRIC};

    #[test]
    fn content_at_the_budget_passes_through_unmodified() {
        let content = "a".repeat(6000);

        assert_eq!(truncate_to_char_budget(&content, 6000), content)
    }

    #[test]
    fn content_over_the_budget_keeps_the_first_6000_chars() {
        let mut content = "a".repeat(6000);
        content.push('b');
        let truncated = truncate_to_char_budget(&content, 6000);

        assert_eq!(truncated.chars().count(), 6000);
        assert!(truncated.chars().all(|c| c == 'a'))
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let content = "é".repeat(10);

        assert_eq!(truncate_to_char_budget(&content, 4), "éééé")
    }

    #[test]
    fn prompt_embeds_short_content_verbatim_after_the_rubric() {
        let content = "Example Domain. This domain is for use in illustrative examples.";
        let prompt = build_scorecard_prompt(content, 6000);

        assert!(prompt.starts_with(SCORECARD_RUBRIC));
        assert!(prompt.ends_with(content))
    }

    #[test]
    fn rubric_lists_all_ten_criteria() {
        for criterion in 1..=10 {
            assert!(SCORECARD_RUBRIC.contains(&format!("{}.", criterion)))
        }
    }
}
