use super::domain::ScoreRecord;
use super::views::{MissingSkillEntry, SkillFrequencyEntry};
use std::collections::HashMap;

pub const TOP_SKILL_LIMIT: usize = 8;
pub const MISSING_SKILL_LIMIT: usize = 6;

/// Ranks résumé skills by how often they line up with required job skills.
///
/// A résumé skill matches a required skill when either lowercased string
/// contains the other. Every match counts, so one job can contribute more than
/// once to the same résumé skill; the resulting percentage is capped at 100.
/// With no matches at all the first résumé skills are returned at 100%.
pub fn rank_top_skills(
    resume_skills: &[String],
    scores: &[ScoreRecord],
) -> Vec<SkillFrequencyEntry> {
    let lowered: Vec<(&str, String)> = resume_skills
        .iter()
        .filter(|skill| !skill.trim().is_empty())
        .map(|skill| (skill.as_str(), skill.to_lowercase()))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for score in scores {
        for required in score.required_skills() {
            let required = required.to_lowercase();
            if required.trim().is_empty() {
                continue;
            }
            for (name, skill) in &lowered {
                if skill.contains(&required) || required.contains(skill.as_str()) {
                    *counts.entry(*name).or_insert(0) += 1;
                }
            }
        }
    }

    if counts.is_empty() {
        return resume_skills
            .iter()
            .take(TOP_SKILL_LIMIT)
            .map(|skill| SkillFrequencyEntry {
                name: skill.clone(),
                frequency_percent: 100,
            })
            .collect();
    }

    let total_jobs = scores.len() as f64;
    let mut entries: Vec<SkillFrequencyEntry> = Vec::with_capacity(counts.len());
    for (name, _) in &lowered {
        if let Some(count) = counts.remove(name) {
            let percent = ((count as f64 / total_jobs) * 100.0).round().min(100.0);
            entries.push(SkillFrequencyEntry {
                name: (*name).to_string(),
                frequency_percent: percent as u8,
            });
        }
    }

    entries.sort_by(|a, b| b.frequency_percent.cmp(&a.frequency_percent));
    entries.truncate(TOP_SKILL_LIMIT);
    entries
}

/// Tallies missing skills across all records, keeping first-seen order for ties.
pub fn rank_missing_skills(scores: &[ScoreRecord]) -> Vec<MissingSkillEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<MissingSkillEntry> = Vec::new();

    for skill in scores.iter().flat_map(|score| score.missing_skills.iter()) {
        match index.get(skill.as_str()) {
            Some(&position) => entries[position].job_count += 1,
            None => {
                index.insert(skill.as_str(), entries.len());
                entries.push(MissingSkillEntry {
                    name: skill.clone(),
                    job_count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.job_count.cmp(&a.job_count));
    entries.truncate(MISSING_SKILL_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{record_missing, record_requiring, skills};

    #[test]
    fn falls_back_to_resume_skills_without_job_data() {
        let resume = skills(&[
            "Rust", "Go", "SQL", "Docker", "AWS", "Kafka", "Redis", "gRPC", "Linux",
        ]);
        let ranked = rank_top_skills(&resume, &[]);
        assert_eq!(ranked.len(), TOP_SKILL_LIMIT);
        assert!(ranked.iter().all(|entry| entry.frequency_percent == 100));
        assert_eq!(ranked[0].name, "Rust");
        assert_eq!(ranked[7].name, "gRPC");
    }

    #[test]
    fn empty_resume_without_matches_is_empty() {
        let scores = vec![record_requiring(&["python"])];
        assert!(rank_top_skills(&[], &scores).is_empty());
    }

    #[test]
    fn substring_match_is_case_insensitive_in_both_directions() {
        let resume = skills(&["React", "PostgreSQL"]);
        let scores = vec![record_requiring(&["react.js"]), record_requiring(&["SQL"])];
        let ranked = rank_top_skills(&resume, &scores);
        assert_eq!(
            ranked,
            vec![
                SkillFrequencyEntry {
                    name: "React".to_string(),
                    frequency_percent: 50,
                },
                SkillFrequencyEntry {
                    name: "PostgreSQL".to_string(),
                    frequency_percent: 50,
                },
            ]
        );
    }

    #[test]
    fn percentages_use_all_records_and_sort_descending() {
        let resume = skills(&["Java", "Python", "Docker"]);
        let scores = vec![
            record_requiring(&["python", "docker"]),
            record_requiring(&["python"]),
            record_requiring(&["python"]),
            record_requiring(&[]),
        ];
        let ranked = rank_top_skills(&resume, &scores);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Python");
        assert_eq!(ranked[0].frequency_percent, 75);
        assert_eq!(ranked[1].name, "Docker");
        assert_eq!(ranked[1].frequency_percent, 25);
    }

    #[test]
    fn frequency_is_capped_at_one_hundred() {
        let resume = skills(&["JavaScript"]);
        let scores = vec![record_requiring(&["java", "script", "javascript"])];
        let ranked = rank_top_skills(&resume, &scores);
        assert_eq!(ranked[0].frequency_percent, 100);
    }

    #[test]
    fn blank_skills_never_match() {
        let resume = skills(&["", "Rust"]);
        let scores = vec![record_requiring(&["  ", "terraform"])];
        let ranked = rank_top_skills(&resume, &scores);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|entry| entry.frequency_percent == 100));
    }

    #[test]
    fn missing_skills_count_duplicates_and_keep_first_seen_ties() {
        let scores = vec![
            record_missing(&["python", "sql"]),
            record_missing(&["python"]),
            record_missing(&["java", "java"]),
        ];
        let ranked = rank_missing_skills(&scores);
        let pairs: Vec<(&str, usize)> = ranked
            .iter()
            .map(|entry| (entry.name.as_str(), entry.job_count))
            .collect();
        assert_eq!(pairs, vec![("python", 2), ("java", 2), ("sql", 1)]);
    }

    #[test]
    fn missing_skills_truncate_to_limit() {
        let scores = vec![record_missing(&["a", "b", "c", "d", "e", "f", "g"])];
        let ranked = rank_missing_skills(&scores);
        assert_eq!(ranked.len(), MISSING_SKILL_LIMIT);
        assert_eq!(ranked[5].name, "f");
    }

    #[test]
    fn missing_skills_empty_for_no_records() {
        assert!(rank_missing_skills(&[]).is_empty());
    }
}
