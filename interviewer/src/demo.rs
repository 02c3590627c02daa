// mock_interviewer/src/demo.rs

//! Sample candidate used by the `demo` subcommand.

pub const JOB_ROLE: &str = "Senior Software Engineer";

pub const CANDIDATE_BACKGROUND: &str = "\
- 5 years of experience in software development
- Proficient in Python, JavaScript, and TypeScript
- Experience with React, Node.js, and Django
- Background in cloud services (AWS, GCP)
- Led a team of 3 developers on a critical project
- Strong experience with CI/CD and DevOps practices
- Computer Science degree from State University";

pub const FOCUS_AREAS: &str = "\
- System design and architecture
- Python best practices and advanced concepts
- Leadership and team collaboration
- Problem-solving and debugging skills";
