use askama::Template;
use elics_shared::InquiryDraft;

#[derive(Template)]
#[template(path = "contact-inquiry.html")]
pub struct InquiryHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "contact-inquiry.txt")]
pub struct InquiryPlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> From<&'a InquiryDraft> for InquiryHtmlTemplate<'a> {
    fn from(draft: &'a InquiryDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            phone: non_empty(&draft.phone),
            lines: draft.message.lines().collect(),
        }
    }
}

impl<'a> From<&'a InquiryDraft> for InquiryPlainTemplate<'a> {
    fn from(draft: &'a InquiryDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            phone: non_empty(&draft.phone),
            message: &draft.message,
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
