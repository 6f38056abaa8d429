//! VCS(이슈 트래커) 연동 계층.

pub mod github;

pub use github::GitHubIssueClient;
