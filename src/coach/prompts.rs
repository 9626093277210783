//! Prompt construction for the coaching operations.
//!
//! Conversation prompts are English because the models follow structural
//! instructions best that way; the persona prompts and the strength
//! analysis are Lithuanian because that is what the student reads.
//!
//! Untrusted text (topic, student argument) is always substituted last in
//! each chain so placeholder-shaped fragments inside it are never
//! re-expanded.

use super::context::{DebateContext, DebatePosition};
use super::personality::Personality;

/// A system/user prompt pair ready to send.
#[derive(Debug, Clone)]
pub struct PromptPair {
    /// System prompt establishing the partner's role.
    pub system: String,
    /// User prompt with the specific request.
    pub user: String,
}

const OPENING_SYSTEM_TEMPLATE: &str = r#"{persona_prompt}

You are starting a debate on: "{topic}"
Your position: {stance} the topic.
Provide a strong opening argument that sets the tone for an educational debate."#;

const OPENING_USER_TEMPLATE: &str = r#"Generate an opening argument for the {position} side of: "{topic}""#;

const REBUTTAL_SYSTEM_TEMPLATE: &str = r#"{persona_prompt}

Debate Topic: "{topic}"
Your Position: {stance_instruction}
Current Round: {round}/5
Context: This is an educational debate for students to practice argumentation skills."#;

const REBUTTAL_USER_TEMPLATE: &str = r#"The student argues: "{argument}"

Please provide a {position} counterargument that is appropriate for round {round}. Be {style}."#;

const FEEDBACK_SYSTEM: &str = "You are a debate coach providing constructive feedback on student arguments. Analyze strengths, suggest improvements, and rate the argument's effectiveness. Keep feedback educational and encouraging.";

const FEEDBACK_USER_TEMPLATE: &str = r#"Please analyze this debate argument for round {round}:

Topic: "{topic}"
Argument: "{argument}"

Provide brief feedback on:
1. Strength of reasoning
2. Use of evidence
3. Clarity of expression
4. Suggestions for improvement

Keep it concise but helpful (2-3 sentences)."#;

const ANALYSIS_SYSTEM: &str = "Tu esi debatų analitikas. Įvertink argumento stiprumą 0-100 skalėje pagal: loginį darną (30%), įrodymų kokybę (25%), aiškumą (20%), originalumą (15%), ir retorini poveikį (10%). Atsiliepk lietuviškai.";

const ANALYSIS_USER_TEMPLATE: &str = r#"Tema: "{topic}"
Pozicija: {position}
Argumentas: "{argument}"

Įvertink šio argumento stiprumą ir grąžink atsakymą tokiu formatu:
SCORE: [skaičius 0-100]
ANALYSIS: [1-2 sakiniai apie stipriąsias ir silpnąsias vietas]"#;

/// Builds the prompt pair for an opening statement.
pub fn build_opening_prompt(
    personality: &Personality,
    topic: &str,
    position: DebatePosition,
) -> PromptPair {
    let system = OPENING_SYSTEM_TEMPLATE
        .replace("{persona_prompt}", &personality.system_prompt)
        .replace("{stance}", position.stance_verb())
        .replace("{topic}", topic);

    let user = OPENING_USER_TEMPLATE
        .replace("{position}", position.as_str())
        .replace("{topic}", topic);

    PromptPair { system, user }
}

/// Builds the prompt pair for a counterargument to the student's move.
pub fn build_rebuttal_prompt(
    personality: &Personality,
    context: &DebateContext,
    argument: &str,
) -> PromptPair {
    let system = REBUTTAL_SYSTEM_TEMPLATE
        .replace("{persona_prompt}", &personality.system_prompt)
        .replace("{stance_instruction}", context.position.stance_instruction())
        .replace("{round}", &context.round.to_string())
        .replace("{topic}", &context.topic);

    let user = REBUTTAL_USER_TEMPLATE
        .replace("{position}", context.position.as_str())
        .replace("{round}", &context.round.to_string())
        .replace("{style}", personality.difficulty.response_style())
        .replace("{argument}", argument);

    PromptPair { system, user }
}

/// Builds the prompt pair for coaching feedback on an argument.
pub fn build_feedback_prompt(argument: &str, topic: &str, round: u32) -> PromptPair {
    let user = FEEDBACK_USER_TEMPLATE
        .replace("{round}", &round.to_string())
        .replace("{topic}", topic)
        .replace("{argument}", argument);

    PromptPair {
        system: FEEDBACK_SYSTEM.to_string(),
        user,
    }
}

/// Builds the prompt pair for the tagged strength analysis.
pub fn build_analysis_prompt(
    argument: &str,
    topic: &str,
    position: DebatePosition,
) -> PromptPair {
    let user = ANALYSIS_USER_TEMPLATE
        .replace("{position}", position.side_label())
        .replace("{topic}", topic)
        .replace("{argument}", argument);

    PromptPair {
        system: ANALYSIS_SYSTEM.to_string(),
        user,
    }
}
