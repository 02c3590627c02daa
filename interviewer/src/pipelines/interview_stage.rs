// mock_interviewer/src/pipelines/interview_stage.rs

use super::{personas, CANDIDATE_BACKGROUND, FOCUS_AREAS, INTERVIEW_STAGE, JOB_ROLE};
use stagechain::StageSpec;

const INSTRUCTION: &str = "\
Run a complete mock interview for a candidate applying for a {{job_role}} position.

**Candidate Background:**
{{candidate_background}}

**Focus Areas:**
{{focus_areas}}

**The interview must contain:**
1. A warm introduction that explains how the interview will run
2. Three or four technical questions relevant to the {{job_role}} role
3. Two or three behavioral questions answered with the STAR method
4. Follow-up questions based on typical answers
5. Time for the candidate to ask their own questions
6. A professional closing

For every question give:
- the question itself
- what a strong answer looks like
- a sample strong answer
- the follow-ups you would ask

Keep it realistic and challenging, but fair.";

const OUTPUT_CONTRACT: &str = "\
A complete mock interview transcript with these sections:
1. Introduction and rapport building
2. Technical questions with ideal answers and scoring criteria
3. Behavioral questions with STAR-format example answers
4. Follow-up questions and their expected responses
5. Candidate Q&A
6. Professional closing
Label and format every section clearly.";

/// First stage: produces the interview transcript. Takes no context.
pub fn interview_stage() -> StageSpec {
  StageSpec::new(INTERVIEW_STAGE, INSTRUCTION, OUTPUT_CONTRACT)
    .requires([JOB_ROLE, CANDIDATE_BACKGROUND, FOCUS_AREAS])
    .with_persona(personas::interviewer())
}
