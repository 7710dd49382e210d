/// Visible text extracted from one fetched page. Lives for a single
/// submission; the character budget is applied later, when the prompt
/// is built.
#[derive(Debug)]
pub struct PageContent {
    pub text: String,
}
