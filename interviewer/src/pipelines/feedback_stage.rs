// mock_interviewer/src/pipelines/feedback_stage.rs

use super::{personas, CANDIDATE_BACKGROUND, EVALUATION_STAGE, FEEDBACK_STAGE, INTERVIEW_STAGE};
use stagechain::StageSpec;

const INSTRUCTION: &str = "\
Using the interview and its evaluation, write feedback that helps the candidate improve.

**Candidate Background:**
{{candidate_background}}

**Cover the following:**

1. **Executive Summary**
   - Overall performance
   - Key takeaways

2. **Strengths to Leverage**
   - What the candidate did well
   - How to make more of it in future interviews

3. **Areas for Improvement**
   - The specific gaps found
   - Actionable steps for each gap

4. **Technical Preparation**
   - Topics to study
   - Resources to explore
   - Practice problems or projects

5. **Communication Enhancement**
   - Tips for clearer answers
   - Refining the STAR method
   - Body language and confidence

6. **Next Steps**
   - A 30-day improvement plan
   - A recommended practice schedule
   - Suggestions for further mock interviews";

const OUTPUT_CONTRACT: &str = "\
A comprehensive feedback report including:
1. Executive summary with an overall assessment
2. Top 3 strengths, with examples and how to leverage them
3. Top 3 areas for improvement, with specific action items
4. Technical study plan with resources and a timeline
5. Communication tips with practice exercises
6. 30-day improvement roadmap with milestones
Keep the feedback encouraging, specific and actionable.";

/// Last stage: coaching feedback. Context: interview, then evaluation.
pub fn feedback_stage() -> StageSpec {
  StageSpec::new(FEEDBACK_STAGE, INSTRUCTION, OUTPUT_CONTRACT)
    .requires([CANDIDATE_BACKGROUND])
    .depends_on([INTERVIEW_STAGE, EVALUATION_STAGE])
    .with_persona(personas::feedback_coach())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn contract_lists_all_six_items_in_order() {
    let spec = feedback_stage();
    let contract = spec.output_contract_template();
    let items = [
      "1. Executive summary",
      "2. Top 3 strengths",
      "3. Top 3 areas for improvement",
      "4. Technical study plan",
      "5. Communication tips",
      "6. 30-day improvement roadmap",
    ];
    let positions: Vec<usize> = items
      .iter()
      .map(|s| contract.find(s).unwrap_or_else(|| panic!("missing item {:?}", s)))
      .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn takes_interview_then_evaluation_as_context() {
    let spec = feedback_stage();
    assert_eq!(spec.dependencies().to_vec(), vec![INTERVIEW_STAGE, EVALUATION_STAGE]);
    assert!(spec.instruction_template().contains("{{candidate_background}}"));
  }
}
