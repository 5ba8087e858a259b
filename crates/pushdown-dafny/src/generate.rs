// Bounded generate/verify/repair loop around an external text generator.
//
// One iteration: build the prompt (with the previous failing code and the
// verifier's feedback, if any), generate, pull the first fenced code block
// out of the response, submit it for verification. Success returns the
// code; exhausting the attempt budget returns no result.

use std::sync::LazyLock;

use regex::Regex;

use crate::DafnyError;
use crate::verify::{Verdict, VerifyClient};

/// First fenced code block, with an optional `dafny`/`Dafny` language tag.
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:[Dd]afny)?\s*(.*?)```").unwrap());

/// External text-generation backend (the LLM boundary).
///
/// Implementations are expected to be stateless per call: prompt in,
/// completion out. Retry and repair policy live entirely in [`prove`].
pub trait TextGenerator {
    /// Produce a completion for `prompt`.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, DafnyError>> + Send;
}

/// Settings for the generation loop.
#[derive(Debug, Clone)]
pub struct ProveConfig {
    /// Total number of generation attempts before giving up.
    pub max_attempts: u32,
}

impl Default for ProveConfig {
    fn default() -> Self {
        // One initial attempt plus three repairs.
        Self { max_attempts: 4 }
    }
}

/// Extract the contents of the first fenced code block, trimmed.
pub fn extract_code(text: &str) -> Option<String> {
    CODE_FENCE
        .captures(text)
        .map(|captures| captures[1].trim().to_string())
}

/// Build the prompt for one attempt. `previous` carries the last failing
/// code and the verifier's feedback for it.
fn build_prompt(instructions: &str, previous: Option<(&str, &str)>) -> String {
    let mut prompt = format!(
        "Generate Dafny code for the following instructions:\n{instructions}\n"
    );
    if let Some((code, feedback)) = previous {
        prompt.push_str(&format!(
            "\nA previously unsuccessful attempt was:\n```\n{code}\n```\n\
             The output of the verification was:\n{feedback}\n"
        ));
    }
    prompt.push_str(
        "\nEnter the entire code for the instructions in a ```dafny```-guarded \
         block of code. Do not include any other text.",
    );
    prompt
}

/// Generate Dafny code for `instructions` until it verifies.
///
/// Each failed attempt re-prompts with the failing code and the checker's
/// feedback. Returns `Ok(Some(code))` on the first verified attempt,
/// `Ok(None)` once `max_attempts` attempts are spent, and `Err` only for
/// generator or endpoint failures (there is no internal retry for those).
pub async fn prove<G: TextGenerator>(
    generator: &G,
    verifier: &VerifyClient,
    instructions: &str,
    config: &ProveConfig,
) -> Result<Option<String>, DafnyError> {
    let mut previous: Option<(String, String)> = None;

    for attempt in 1..=config.max_attempts {
        let prompt = build_prompt(
            instructions,
            previous.as_ref().map(|(c, f)| (c.as_str(), f.as_str())),
        );
        let text = generator.generate(&prompt).await?;

        let Some(code) = extract_code(&text) else {
            tracing::warn!(attempt, "response contains no fenced code block");
            previous = Some((text, "no fenced code block found in the response".to_string()));
            continue;
        };

        let Verdict { success, feedback } = verifier.verify(&code).await?;
        if success {
            tracing::info!(attempt, "verification succeeded");
            return Ok(Some(code));
        }
        tracing::warn!(attempt, %feedback, "verification failed");
        previous = Some((code, feedback));
    }

    tracing::warn!(
        max_attempts = config.max_attempts,
        "giving up: attempt budget exhausted"
    );
    Ok(None)
}
