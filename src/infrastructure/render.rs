//! 이슈 코멘트용 Markdown 렌더링 모듈.

use crate::domain::review::{CommentTemplate, MISSING_SUBJECT_PLACEHOLDER, ReviewContext};

/// 템플릿 종류에 맞는 코멘트 본문을 생성한다.
pub fn render_comment_markdown(
    template: CommentTemplate,
    context: &ReviewContext,
    review: &str,
    docs_url: &str,
) -> String {
    let job_summary_url = context.job_summary_url();
    match template {
        CommentTemplate::ReviewSummary => render_review_summary_markdown(&job_summary_url, review),
        CommentTemplate::PatchReview => render_patch_review_markdown(
            &job_summary_url,
            review,
            context.optional_subject.as_deref(),
            docs_url,
        ),
    }
}

/// PR 코멘트용 본문. 리뷰 내용은 손대지 않고 코드 블록에 넣는다.
pub fn render_review_summary_markdown(job_summary_url: &str, review: &str) -> String {
    format!("AI review job summary: {job_summary_url}\n\nInline review:\n```\n{review}\n```")
}

/// 패치 시리즈용 본문.
/// 메일 회신 봇이 `In-Reply-To-Subject:` 줄로 원래 스레드를 찾는다.
pub fn render_patch_review_markdown(
    job_summary_url: &str,
    review: &str,
    subject: Option<&str>,
    docs_url: &str,
) -> String {
    let subject = subject.unwrap_or(MISSING_SUBJECT_PLACEHOLDER);

    let mut out = String::new();
    out.push_str("```\n");
    out.push_str(review);
    out.push_str("\n```\n\n---\n");
    out.push_str(
        "AI reviewed your patch. Please fix the bug or email reply why it's not a bug.\n",
    );
    out.push_str(&format!("See: {docs_url}\n\n"));
    out.push_str(&format!("In-Reply-To-Subject: `{subject}`\n"));
    out.push_str(&format!("CI run summary: {job_summary_url}\n"));
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::review::DEFAULT_DOCS_URL;

    const SUMMARY_URL: &str = "https://github.com/kernel-patches/bpf/actions/runs/42";

    fn context(subject: Option<&str>) -> ReviewContext {
        ReviewContext {
            server_url: "https://github.com".to_string(),
            repository_slug: "kernel-patches/bpf".to_string(),
            run_id: "42".to_string(),
            review_file_path: PathBuf::from("review.md"),
            issue_number: 1,
            owner_login: "kernel-patches".to_string(),
            repo_name: "bpf".to_string(),
            optional_subject: subject.map(ToString::to_string),
        }
    }

    fn subject_line(body: &str) -> &str {
        body.lines()
            .find(|l| l.starts_with("In-Reply-To-Subject:"))
            .expect("subject line present")
    }

    #[test]
    fn review_summary_has_one_fenced_block_and_one_url_line() {
        let body = render_comment_markdown(
            CommentTemplate::ReviewSummary,
            &context(None),
            "X",
            DEFAULT_DOCS_URL,
        );

        assert_eq!(body.matches("```").count(), 2);
        assert!(body.contains("```\nX\n```"));

        let url_lines: Vec<&str> = body
            .lines()
            .filter(|l| l.contains("/actions/runs/"))
            .collect();
        assert_eq!(url_lines, vec![format!("AI review job summary: {SUMMARY_URL}")]);
    }

    #[test]
    fn review_summary_layout_matches_workflow_format() {
        let body = render_review_summary_markdown(SUMMARY_URL, "looks fine");
        assert_eq!(
            body,
            format!("AI review job summary: {SUMMARY_URL}\n\nInline review:\n```\nlooks fine\n```")
        );
    }

    #[test]
    fn review_text_is_kept_verbatim() {
        let review = "## Findings\n\n- `foo()` leaks on error\n\n";
        let body = render_review_summary_markdown(SUMMARY_URL, review);
        assert!(body.contains(review));
    }

    #[test]
    fn patch_review_uses_placeholder_when_subject_missing() {
        let body = render_comment_markdown(
            CommentTemplate::PatchReview,
            &context(None),
            "X",
            DEFAULT_DOCS_URL,
        );
        assert_eq!(
            subject_line(&body),
            "In-Reply-To-Subject: `Could not determine patch subject`"
        );
    }

    #[test]
    fn patch_review_quotes_given_subject() {
        let body = render_comment_markdown(
            CommentTemplate::PatchReview,
            &context(Some("fix: null check")),
            "X",
            DEFAULT_DOCS_URL,
        );
        assert_eq!(subject_line(&body), "In-Reply-To-Subject: `fix: null check`");
    }

    #[test]
    fn patch_review_starts_with_review_and_ends_with_footer() {
        let body = render_patch_review_markdown(SUMMARY_URL, "X", None, "https://docs.example/ai");

        assert!(body.starts_with("```\nX\n```\n"));
        assert!(body.contains("Please fix the bug or email reply why it's not a bug."));
        assert!(body.contains("See: https://docs.example/ai\n"));
        assert!(body.ends_with(&format!("CI run summary: {SUMMARY_URL}\n")));
    }
}
