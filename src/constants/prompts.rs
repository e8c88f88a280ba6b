pub const QUESTION_WRITER_SYSTEM_PROMPT: &str = "You are an expert English language test creator. Generate high-quality, educational questions following Cambridge English standards.";

pub const QUESTION_GENERATION_PROMPT: &str = "Generate {count} {question_type} English language test questions for {level} level students on the topic of \"{topic}\".

For each question, provide:
1. The question text in `prompt`
2. {options_line}
3. The correct answer in `correct_answer`, written exactly as a student would have to type or select it
4. A brief explanation in `explanation`

Return ONLY a JSON array. No prose, no markdown fences. Each element must conform to this JSON schema:

{schema}

Make sure questions follow Cambridge English exam standards and are appropriate for {level} level.";

pub const MULTIPLE_CHOICE_OPTIONS_LINE: &str =
    "4 answer options in `options`; `correct_answer` must be identical to one of them";

pub const NO_OPTIONS_LINE: &str = "No `options` field";

pub const QUIZ_GENERATION_PROMPT: &str = "Create a comprehensive English language quiz on \"{topic}\" for {level} level students.

Generate {count} questions with a mix of:
- Multiple choice (60%)
- True/False (20%), answered with \"True\" or \"False\"
- Fill in the blank (20%)

Only multiple choice questions carry `options`. Each question is worth 10 points unless it is noticeably harder.

Return ONLY a JSON object. No prose, no markdown fences. It must conform to this JSON schema:

{schema}";
