//! HTML page model and rendering.

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use crate::download::DownloadKind;
use crate::prompt::{
    CONTRACT_TYPES, CUSTOM_CONTRACT_TYPE, ContractInput, DOCUMENT_TYPES, OTHER_DOCUMENT_TYPE,
    QuestionInput, TemplateInput,
};

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// The three services offered once a key is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    #[default]
    Question,
    Template,
    Contract,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Question, Service::Template, Service::Contract];

    pub fn slug(self) -> &'static str {
        match self {
            Service::Question => "question",
            Service::Template => "template",
            Service::Contract => "contract",
        }
    }

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            Service::Question => "Ask a Legal Question",
            Service::Template => "Request a Document Template",
            Service::Contract => "Generate Legal Contract Draft",
        }
    }

    /// Page heading.
    pub fn heading(self) -> &'static str {
        match self {
            Service::Question => "Ask a Legal Question",
            Service::Template => "Document Template Generator",
            Service::Contract => "Contract Draft Generator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DownloadLink {
    pub kind: DownloadKind,
    pub label: String,
    pub file_name: String,
}

impl DownloadLink {
    pub fn new(kind: DownloadKind, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            kind,
            file_name: kind.file_name(&label),
            label,
        }
    }
}

/// Generated text shown below the form.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub heading: &'static str,
    pub body: String,
    pub caption: Option<&'static str>,
    pub download: Option<DownloadLink>,
}

#[derive(Debug, Serialize)]
struct NavItem {
    slug: &'static str,
    title: &'static str,
    active: bool,
}

/// Everything the page template needs.
#[derive(Debug, Serialize)]
pub struct PageView {
    has_logo: bool,
    validated: bool,
    service: Service,
    heading: &'static str,
    services: Vec<NavItem>,
    pub notices: Vec<Notice>,
    pub outcome: Option<Outcome>,
    pub question: QuestionInput,
    pub template: TemplateInput,
    pub contract: ContractInput,
    document_types: &'static [&'static str],
    contract_types: &'static [&'static str],
    other_document_type: &'static str,
    custom_contract_type: &'static str,
}

impl PageView {
    pub fn new(has_logo: bool, validated: bool, service: Service) -> Self {
        Self {
            has_logo,
            validated,
            service,
            heading: service.heading(),
            services: Service::ALL
                .into_iter()
                .map(|s| NavItem {
                    slug: s.slug(),
                    title: s.title(),
                    active: s == service,
                })
                .collect(),
            notices: Vec::new(),
            outcome: None,
            question: QuestionInput::default(),
            template: TemplateInput::default(),
            contract: ContractInput::default(),
            document_types: DOCUMENT_TYPES,
            contract_types: CONTRACT_TYPES,
            other_document_type: OTHER_DOCUMENT_TYPE,
            custom_contract_type: CUSTOM_CONTRACT_TYPE,
        }
    }

    pub fn with_notice(mut self, level: NoticeLevel, text: impl Into<String>) -> Self {
        self.notices.push(Notice::new(level, text));
        self
    }
}

/// Compiled page templates. User content is HTML-escaped.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: &PageView) -> Result<String, tera::Error> {
        let context = Context::from_serialize(view)?;
        self.tera.render("page.html", &context)
    }
}
