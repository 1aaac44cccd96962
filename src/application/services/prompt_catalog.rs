//! The fixed prompt templates behind every analysis capability.
//!
//! One generic handler is parameterized by a template key and an input
//! shape instead of one route function per capability.

/// Input accepted by a prompt template. Shape mismatches are rejected
/// before any model call.
#[derive(Debug, Clone)]
pub enum AnalysisInput {
    /// One document, optionally accompanied by reference material
    /// (a firm playbook, risk thresholds).
    Document {
        text: String,
        companion: Option<String>,
    },
    /// Original and revised versions for comparison.
    DocumentPair {
        document_a: String,
        document_b: String,
    },
    /// Structured drafting request, no uploaded document.
    Drafting {
        document_type: String,
        jurisdiction: Option<String>,
        parties: Option<String>,
        details: String,
    },
    /// Document checked against a jurisdiction and named regulations.
    Compliance {
        text: String,
        jurisdiction: Option<String>,
        regulations: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    SingleDocument,
    DocumentWithCompanion,
    DocumentPair,
    Drafting,
    Compliance,
    /// Served by the session-backed chat endpoint, not the analysis endpoint.
    Conversational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptTemplate {
    ReviewContract,
    TriageNda,
    ClauseExtraction,
    Draft,
    ComplianceCheck,
    Compare,
    Summarize,
    PlainLanguage,
    RiskAssessment,
    Chat,
}

impl PromptTemplate {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "review-contract" => Some(Self::ReviewContract),
            "triage-nda" => Some(Self::TriageNda),
            "clause-extraction" => Some(Self::ClauseExtraction),
            "draft" => Some(Self::Draft),
            "compliance-check" => Some(Self::ComplianceCheck),
            "compare" => Some(Self::Compare),
            "summarize" => Some(Self::Summarize),
            "plain-language" => Some(Self::PlainLanguage),
            "risk-assessment" => Some(Self::RiskAssessment),
            "chat" => Some(Self::Chat),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ReviewContract => "review-contract",
            Self::TriageNda => "triage-nda",
            Self::ClauseExtraction => "clause-extraction",
            Self::Draft => "draft",
            Self::ComplianceCheck => "compliance-check",
            Self::Compare => "compare",
            Self::Summarize => "summarize",
            Self::PlainLanguage => "plain-language",
            Self::RiskAssessment => "risk-assessment",
            Self::Chat => "chat",
        }
    }

    pub fn input_shape(&self) -> InputShape {
        match self {
            Self::ReviewContract | Self::TriageNda => InputShape::DocumentWithCompanion,
            Self::ClauseExtraction
            | Self::Summarize
            | Self::PlainLanguage
            | Self::RiskAssessment => InputShape::SingleDocument,
            Self::Draft => InputShape::Drafting,
            Self::ComplianceCheck => InputShape::Compliance,
            Self::Compare => InputShape::DocumentPair,
            Self::Chat => InputShape::Conversational,
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::ReviewContract => REVIEW_CONTRACT_PROMPT,
            Self::TriageNda => TRIAGE_NDA_PROMPT,
            Self::ClauseExtraction => CLAUSE_EXTRACTION_PROMPT,
            Self::Draft => DRAFT_PROMPT,
            Self::ComplianceCheck => COMPLIANCE_CHECK_PROMPT,
            Self::Compare => COMPARE_PROMPT,
            Self::Summarize => SUMMARIZE_PROMPT,
            Self::PlainLanguage => PLAIN_LANGUAGE_PROMPT,
            Self::RiskAssessment => RISK_ASSESSMENT_PROMPT,
            Self::Chat => CHAT_PROMPT,
        }
    }

    /// Render the user message for this template, or `None` when the input
    /// does not match the template's shape.
    pub fn build_user_message(&self, input: &AnalysisInput) -> Option<String> {
        match (self, input) {
            (Self::ReviewContract, AnalysisInput::Document { text, companion }) => {
                let mut msg = format!("CONTRACT TO REVIEW:\n\n{}", text);
                if let Some(playbook) = companion.as_deref().filter(|p| !p.trim().is_empty()) {
                    msg.push_str(&format!(
                        "\n\n---\n\nFIRM PLAYBOOK (preferred terms & positions):\n\n{}",
                        playbook
                    ));
                }
                Some(msg)
            }
            (Self::TriageNda, AnalysisInput::Document { text, companion }) => {
                let mut msg = format!("NDA DOCUMENT:\n\n{}", text);
                if let Some(thresholds) = companion.as_deref().filter(|t| !t.trim().is_empty()) {
                    msg.push_str(&format!(
                        "\n\n---\n\nRISK THRESHOLDS & POLICIES:\n\n{}",
                        thresholds
                    ));
                }
                Some(msg)
            }
            (
                Self::ClauseExtraction | Self::Summarize | Self::PlainLanguage
                | Self::RiskAssessment,
                AnalysisInput::Document { text, .. },
            ) => Some(text.clone()),
            (
                Self::Draft,
                AnalysisInput::Drafting {
                    document_type,
                    jurisdiction,
                    parties,
                    details,
                },
            ) => {
                let mut msg = format!("DOCUMENT TYPE: {}\n", document_type);
                if let Some(jurisdiction) = jurisdiction {
                    msg.push_str(&format!("JURISDICTION: {}\n", jurisdiction));
                }
                if let Some(parties) = parties {
                    msg.push_str(&format!("PARTIES: {}\n", parties));
                }
                msg.push_str(&format!("\nDETAILS & REQUIREMENTS:\n{}", details));
                Some(msg)
            }
            (
                Self::ComplianceCheck,
                AnalysisInput::Compliance {
                    text,
                    jurisdiction,
                    regulations,
                },
            ) => Some(format!(
                "JURISDICTION: {}\nREGULATIONS TO CHECK AGAINST: {}\n\nDOCUMENT:\n{}",
                jurisdiction.as_deref().unwrap_or("General"),
                regulations
                    .as_deref()
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or("General best practices"),
                text
            )),
            (
                Self::Compare,
                AnalysisInput::DocumentPair {
                    document_a,
                    document_b,
                },
            ) => Some(format!(
                "=== DOCUMENT A (Original) ===\n{}\n\n=== DOCUMENT B (Revised) ===\n{}",
                document_a, document_b
            )),
            _ => None,
        }
    }
}

const REVIEW_CONTRACT_PROMPT: &str = "You are an expert legal contract reviewer. Perform a thorough first-pass review of the contract provided.\n\nStructure your analysis as:\n\n## EXECUTIVE SUMMARY\nContract type, parties, and overall assessment in 2-3 sentences.\n\n## RISK TRIAGE\nAssign every significant clause a risk level:\n### STANDARD (Low Risk) - market-friendly clauses and why they are acceptable.\n### CAUTION (Medium Risk) - the risk, the more favorable position, and suggested redline language.\n### CRITICAL (High Risk) - why it is unacceptable, the worst-case exposure, and replacement language.\n\n## CONTEXTUAL ANALYSIS\nHow clauses interact (e.g. indemnity vs. limitation of liability, conflicting definitions).\n\n## PLAYBOOK ALIGNMENT\nIf a firm playbook was provided, flag every deviation from its preferred positions with a recommended action (accept / negotiate / reject). Skip this section when no playbook was provided.\n\n## KEY DATES & DEADLINES\nAll important dates, notice periods, and renewal terms.\n\n## RECOMMENDED NEXT STEPS\nA prioritized list of negotiation points.\n\nQuote the actual contract language when flagging issues and provide replacement language for medium and high risk items.";

const TRIAGE_NDA_PROMPT: &str = "You are an expert NDA analyst triaging Non-Disclosure Agreements for busy attorneys.\n\nProduce a structured report:\n\n## NDA QUICK PROFILE\nA table covering: type (mutual / one-way and disclosing party), governing law, effective date, term, expiration, and survival period.\n\n## PARTY ANALYSIS\nAll parties, their roles, and covered affiliates.\n\n## KEY TERMS EXTRACTED\nDefinition and exclusions of confidential information, permitted disclosures, purpose limitation, return/destruction obligations, residuals clause, non-solicitation provisions, injunctive relief.\n\n## RISK ASSESSMENT\nFlag unusual or one-sided terms against the provided risk thresholds, or against market practice when none were provided.\n\n## RECOMMENDATION\nSign as-is, negotiate specific points, or escalate for full review.";

const CLAUSE_EXTRACTION_PROMPT: &str = "You are a legal document analyst specializing in clause identification and extraction.\n\nIdentify every distinct clause in the provided document. For each clause report: a standard clause-type label, the exact quoted text, its location (section/paragraph if determinable), and a one-sentence plain-language description of its effect. Group the results by clause category and note any clauses that are commonly expected for this document type but missing.";

const DRAFT_PROMPT: &str = "You are an expert legal document drafter. Draft professional, comprehensive legal documents based on the user's specifications.\n\nUse the document type, jurisdiction, parties, and requirements supplied. Produce a complete, well-structured document with numbered sections, defined terms, and standard boilerplate appropriate to the document type and jurisdiction. Where the user's requirements leave a material choice open, choose the market-standard position and flag the choice in a short DRAFTING NOTES section at the end.";

const COMPLIANCE_CHECK_PROMPT: &str = "You are a regulatory compliance analyst. Review the provided document against the stated jurisdiction and regulations.\n\nReport: \n## COMPLIANCE SUMMARY - overall posture in 2-3 sentences.\n## FINDINGS - for each issue: the regulation or requirement implicated, the document language at issue (quoted), the gap, and the remediation.\n## MISSING PROVISIONS - required clauses or disclosures absent from the document.\n## RECOMMENDATIONS - prioritized remediation steps.\nWhen no specific regulations were named, check against general best practices for the document type.";

const COMPARE_PROMPT: &str = "You are a legal document comparison specialist. Compare the two documents provided and produce a redline analysis.\n\nReport:\n## CHANGE SUMMARY - the overall character of the revisions.\n## MATERIAL CHANGES - each substantive change with the original language, the revised language, and who the change favors.\n## NON-MATERIAL CHANGES - formatting, renumbering, and stylistic edits, briefly.\n## RISK IMPACT - how the changes shift the risk allocation between the parties.\nTreat Document A as the original and Document B as the revised version.";

const SUMMARIZE_PROMPT: &str = "You are a legal document summarization expert. Provide a comprehensive yet concise summary of the legal document.\n\nCover: the document type and purpose, the parties and their obligations, key commercial terms (payment, term, termination), risk allocation (indemnities, liability caps, warranties), and any unusual or notable provisions. Lead with a 2-3 sentence executive summary, then use short sections with headers.";

const PLAIN_LANGUAGE_PROMPT: &str = "You are a legal-to-plain-English translator. Rewrite the provided legal document in simple, clear language a non-lawyer can understand.\n\nWork section by section, preserving the document's order. Keep each rewritten section short, use everyday words, and call out in a WHAT THIS MEANS FOR YOU note anything that creates a significant obligation, cost, or loss of rights. Do not add legal advice; translate what the document actually says.";

const RISK_ASSESSMENT_PROMPT: &str = "You are a legal risk assessment specialist. Perform a comprehensive risk analysis of the provided document.\n\nReport:\n## RISK OVERVIEW - overall risk posture.\n## RISK REGISTER - each identified risk with severity (low/medium/high), likelihood, the clause or omission creating it (quoted), and the potential exposure.\n## MITIGATIONS - concrete drafting or negotiation steps for each medium and high risk.\n## OPEN QUESTIONS - facts the assessment depends on that the document does not answer.";

const CHAT_PROMPT: &str = "You are a knowledgeable legal AI assistant helping attorneys, legal professionals, and business users with legal questions and analysis. Give accurate, well-organized answers in markdown, cite the relevant legal concepts or document language you rely on, and say clearly when a question needs jurisdiction-specific advice from a licensed attorney. You are an analysis tool, not a substitute for legal counsel.";
