//! Prompt construction for developer summaries.

use crate::domain::models::{Profile, RepoSummary};

/// Render the profile block fed to the model.
fn profile_block(profile: &Profile) -> String {
    format!(
        "Name: {}\nBio: {}\nFollowers: {}\nPublic repos: {}\nLocation: {}",
        profile.display_name(),
        profile.bio.as_deref().unwrap_or("No bio"),
        profile.followers,
        profile.public_repos,
        profile.location.as_deref().unwrap_or("Not specified"),
    )
}

/// Render the repository list, one numbered line per repo.
///
/// An empty list is meaningful input ("zero public repos"), distinct from
/// repositories being unknown, and gets its own explicit line.
fn repo_block(repositories: &[RepoSummary]) -> String {
    if repositories.is_empty() {
        return "This user has no public repositories.".to_string();
    }

    repositories
        .iter()
        .enumerate()
        .map(|(i, repo)| {
            format!(
                "{}. {} — {} (Language: {}, Stars: {})",
                i + 1,
                repo.name,
                repo.description.as_deref().unwrap_or("No description"),
                repo.language.as_deref().unwrap_or("Unknown"),
                repo.stargazers_count,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full chat prompt for a profile and its repositories.
pub fn build_prompt(profile: &Profile, repositories: &[RepoSummary]) -> String {
    format!(
        "You are an AI assistant that summarizes GitHub developers.\n\n\
         Here is the profile and their repositories:\n\n\
         Profile:\n{}\n\n\
         Repositories:\n{}\n\n\
         Write a friendly, detailed, professional summary (3-5 sentences) describing:\n\
         - what this developer is good at,\n\
         - their skills,\n\
         - their project style,\n\
         - what they seem to focus on,\n\
         - any strengths you can infer.\n\n\
         Return ONLY the summary. No headings, no bullet points, no extra explanations.",
        profile_block(profile),
        repo_block(repositories),
    )
}
