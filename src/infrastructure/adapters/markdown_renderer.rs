//! 마크다운 렌더링 포트 구현 어댑터.

use crate::application::ports::CommentRenderer;
use crate::domain::review::{CommentTemplate, ReviewContext};
use crate::infrastructure::render;

/// 마크다운 렌더링 어댑터.
pub struct MarkdownRendererAdapter;

impl CommentRenderer for MarkdownRendererAdapter {
    fn render(
        &self,
        template: CommentTemplate,
        context: &ReviewContext,
        review: &str,
        docs_url: &str,
    ) -> String {
        render::render_comment_markdown(template, context, review, docs_url)
    }
}
