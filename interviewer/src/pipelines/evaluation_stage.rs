// mock_interviewer/src/pipelines/evaluation_stage.rs

use super::{personas, INTERVIEW_STAGE, EVALUATION_STAGE, JOB_ROLE};
use stagechain::StageSpec;

/// Weighted scoring criteria, in the order the report lists them.
pub const CRITERIA: [(&str, u8); 4] = [
  ("Technical Competency", 30),
  ("Communication Skills", 25),
  ("Behavioral Competencies", 25),
  ("Cultural Fit & Professionalism", 20),
];

/// Possible overall outcomes of the evaluation.
pub const RECOMMENDATIONS: [&str; 3] = ["Hire", "No Hire", "Maybe"];

const INSTRUCTION: &str = "\
Evaluate the mock interview above for the {{job_role}} position.

**Evaluation Criteria:**

1. **Technical Competency (30%)**
   - Accuracy of technical knowledge
   - Depth of understanding
   - Problem-solving approach

2. **Communication Skills (25%)**
   - Clarity of expression
   - Structure and organization
   - Signs of active listening

3. **Behavioral Competencies (25%)**
   - Leadership potential
   - Teamwork and collaboration
   - Adaptability and growth mindset

4. **Cultural Fit & Professionalism (20%)**
   - Alignment with company values
   - Professional demeanor
   - Enthusiasm and motivation

For each criterion give a score from 1 to 10, specific observations, and
examples taken from the interview.";

const OUTPUT_CONTRACT: &str = "\
A detailed evaluation report containing:
1. Overall score and a recommendation: Hire, No Hire or Maybe
2. A score from 1 to 10 for each criterion (Technical Competency 30%, Communication Skills 25%, Behavioral Competencies 25%, Cultural Fit & Professionalism 20%)
3. At least 3 key strengths
4. At least 2 areas of concern
5. A comparison with typical candidates at this level
6. Specific examples from the interview backing each point";

/// Second stage: scores the transcript. Context: the interview.
pub fn evaluation_stage() -> StageSpec {
  StageSpec::new(EVALUATION_STAGE, INSTRUCTION, OUTPUT_CONTRACT)
    .requires([JOB_ROLE])
    .depends_on([INTERVIEW_STAGE])
    .with_persona(personas::evaluator())
}
