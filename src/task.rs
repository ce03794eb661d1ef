//! Legal task templates.
//!
//! Each task maps user input to a model prompt through a fixed template.
//! Every prompt starts with the same guard preamble that restricts the model
//! to legal questions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Preamble prepended to every task prompt.
pub const GUARD_PREAMBLE: &str = "You are an expert AI Legal Assistant. \
Your sole purpose is to provide professional legal assistance.

CRITICAL INSTRUCTION:
1. Analyze the user's input.
2. If the input is NOT related to law, legal documents, court procedures, contracts, rights, or legal advice, you MUST REFUSE to answer.
3. In that case, reply ONLY with: \"\u{26A0}\u{FE0F} I am sorry, but this bot is designed exclusively for legal purposes. Please ask a question related to law, courts, or legal documents.\"
4. Do not provide any other information or answer the non-legal question.

If the input IS legal-related, proceed as follows:
";

/// The kind of help requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalTask {
    /// Draft a legal document from a description
    Draft,
    /// Summarize law, precedents and statutes on a topic
    Research,
    /// Answer a client's question in plain terms
    ClientQa,
    /// Review supplied text for risks and unfair terms
    Review,
    /// Answer a general legal query
    GeneralAdvice,
}

/// Static description of a task.
#[derive(Debug)]
pub struct TaskTemplate {
    pub task: LegalTask,
    /// Human-readable name
    pub label: &'static str,
    /// Short usage hint shown before input is collected
    pub instructions: &'static str,
    /// Task-specific part of the prompt
    pub format: fn(&str) -> String,
}

static TEMPLATES: [TaskTemplate; 5] = [
    TaskTemplate {
        task: LegalTask::Draft,
        label: "Document Drafting",
        instructions: "Describe the document you need drafted (e.g., 'NDA for a freelance designer'). \
I will provide a comprehensive draft.",
        format: |input| {
            format!(
                "Draft a professional legal document based on this request: '{input}'. \
Ensure it includes all standard clauses, definitions, and is formatted correctly."
            )
        },
    },
    TaskTemplate {
        task: LegalTask::Research,
        label: "Legal Research",
        instructions: "Enter a legal topic or question. \
I will research precedents, statutes, and case law summaries for you.",
        format: |input| {
            format!(
                "Conduct legal research on: '{input}'. Provide a detailed summary of relevant \
legal concepts, precedents, statutes, or regulations. Cite sources where applicable (simulated)."
            )
        },
    },
    TaskTemplate {
        task: LegalTask::ClientQa,
        label: "Client Q&A",
        instructions: "Ask a legal question as if you were a client. \
I will provide a clear, professional answer with legal context.",
        format: |input| {
            format!(
                "Answer this client question in simple, clear, and empathetic terms, \
while maintaining legal accuracy: '{input}'"
            )
        },
    },
    TaskTemplate {
        task: LegalTask::Review,
        label: "Document Review",
        instructions: "Upload a PDF contract or paste the text below. \
I will analyze it for risks, loopholes, and unfair terms.",
        format: |input| {
            format!(
                "Review the following legal text for risks, loopholes, ambiguities, and unfair \
terms. Provide a bulleted list of issues and recommendations: '{input}'"
            )
        },
    },
    TaskTemplate {
        task: LegalTask::GeneralAdvice,
        label: "General Legal Advice",
        instructions: "Ask me anything about law, procedures, or legal definitions. \
I'm here to help.",
        format: |input| format!("Provide a comprehensive answer to this legal query: '{input}'"),
    },
];

impl LegalTask {
    /// All tasks in display order.
    pub const ALL: [LegalTask; 5] = [
        LegalTask::Draft,
        LegalTask::Research,
        LegalTask::ClientQa,
        LegalTask::Review,
        LegalTask::GeneralAdvice,
    ];

    /// Template entry for this task.
    pub fn template(self) -> &'static TaskTemplate {
        &TEMPLATES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.template().label
    }

    pub fn instructions(self) -> &'static str {
        self.template().instructions
    }

    /// Short command-line name.
    pub fn slug(self) -> &'static str {
        match self {
            LegalTask::Draft => "draft",
            LegalTask::Research => "research",
            LegalTask::ClientQa => "client-qa",
            LegalTask::Review => "review",
            LegalTask::GeneralAdvice => "advice",
        }
    }

    /// Full prompt: guard preamble followed by the task template.
    pub fn build_prompt(self, input: &str) -> String {
        let mut prompt = String::from(GUARD_PREAMBLE);
        prompt.push_str(&(self.template().format)(input));
        prompt
    }

    /// Whether the task can take an uploaded document.
    pub fn accepts_document(self) -> bool {
        self == LegalTask::Review
    }

    /// Whether responses to this task can be exported as a PDF.
    pub fn exports_pdf(self) -> bool {
        self == LegalTask::Draft
    }
}

impl fmt::Display for LegalTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a task name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task '{0}' (expected draft, research, client-qa, review or advice)")]
pub struct UnknownTask(pub String);

impl FromStr for LegalTask {
    type Err = UnknownTask;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" | "drafting" => Ok(LegalTask::Draft),
            "research" => Ok(LegalTask::Research),
            "client-qa" | "client_qa" | "qa" | "client" => Ok(LegalTask::ClientQa),
            "review" => Ok(LegalTask::Review),
            "advice" | "general" | "general-advice" => Ok(LegalTask::GeneralAdvice),
            _ => Err(UnknownTask(s.to_string())),
        }
    }
}
