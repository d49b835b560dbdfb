//! Prompt templates for the primality question

use crate::core::candidate::Candidate;

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt asking whether `candidate` is prime.
    ///
    /// States the definition of a prime and forbids anything but a
    /// single lowercase word, so the answer can be validated strictly.
    pub fn primality(candidate: Candidate) -> String {
        let n = candidate.value();
        format!(
            r#"You are solving a mathematical problem that requires a one-word answer.

TASK: Determine if {n} is a prime number.

DEFINITION: A prime number is a natural number greater than 1 that is not a product of two smaller natural numbers.

REQUIREMENTS:
- Answer with ONLY the word "yes" or "no"
- "yes" if {n} is prime
- "no" if {n} is not prime
- Do not include explanations, periods, or any other text

Output:"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primality_embeds_number_three_times() {
        let prompt = PromptTemplate::primality(Candidate::new(104729));
        assert_eq!(prompt.matches("104729").count(), 3);
        assert!(prompt.contains("TASK: Determine if 104729 is a prime number."));
        assert!(prompt.trim_end().ends_with("Output:"));
    }

    #[test]
    fn test_primality_negative_number() {
        let prompt = PromptTemplate::primality(Candidate::new(-7));
        assert!(prompt.contains("\"yes\" if -7 is prime"));
        assert!(prompt.contains("\"no\" if -7 is not prime"));
    }

    #[test]
    fn test_primality_is_deterministic() {
        assert_eq!(
            PromptTemplate::primality(Candidate::new(17)),
            PromptTemplate::primality(Candidate::new(17))
        );
    }
}
