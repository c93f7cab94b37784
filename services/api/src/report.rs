use clap::Args;
use resume_insights::analytics::{AnalyticsDashboard, ResumeSnapshot};
use resume_insights::error::AppError;
use resume_insights::import::SnapshotImporter;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Résumé JSON document (nested or flat layout)
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Score records as JSON or CSV; omitted means no jobs analyzed yet
    #[arg(long)]
    pub(crate) scores: Option<PathBuf>,
    /// Print the dashboard as pretty JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        resume,
        scores,
        json,
    } = args;

    let profile = SnapshotImporter::resume_from_path(resume)?;
    let scores = match scores {
        Some(path) => SnapshotImporter::scores_from_path(path)?,
        None => Vec::new(),
    };
    let dashboard = ResumeSnapshot::new(profile, scores).dashboard();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &dashboard).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        write_dashboard(&mut out, &dashboard)?;
    }
    Ok(())
}

pub(crate) fn write_dashboard<W: Write>(
    out: &mut W,
    dashboard: &AnalyticsDashboard,
) -> io::Result<()> {
    let profile = &dashboard.profile;
    writeln!(out, "Resume analytics for {}", profile.resume_id)?;
    if !profile.email.is_empty() {
        writeln!(out, "Owner: {}", profile.email)?;
    }
    writeln!(
        out,
        "Uploaded {} | {} skills ({}) | {} years ({})",
        profile.uploaded_on,
        profile.skill_count,
        profile.skill_coverage,
        profile.experience_years,
        profile.experience_level
    )?;

    let stats = &dashboard.stats;
    writeln!(out, "\nScore summary")?;
    writeln!(
        out,
        "- {} jobs analyzed | average {}% | best {}% | spread {} pts",
        stats.total_jobs, stats.average_score, stats.best_score, stats.improvement
    )?;

    writeln!(out, "\nTop skills")?;
    for skill in &dashboard.top_skills {
        writeln!(out, "- {}: {}%", skill.name, skill.frequency_percent)?;
    }

    if dashboard.distribution.is_empty() {
        writeln!(out, "\nScore distribution: none")?;
    } else {
        writeln!(out, "\nScore distribution")?;
        for bucket in &dashboard.distribution {
            writeln!(
                out,
                "- {}: {} jobs | {}",
                bucket.display_label, bucket.count, bucket.description
            )?;
        }
    }

    if dashboard.missing_skills.is_empty() {
        writeln!(out, "\nMissing skills: none")?;
    } else {
        writeln!(out, "\nMissing skills")?;
        for skill in &dashboard.missing_skills {
            writeln!(out, "- {}: {} jobs", skill.name, skill.job_count)?;
        }
    }

    writeln!(out, "\nRecommendations")?;
    for rec in &dashboard.recommendations {
        writeln!(out, "- {}: {}", rec.title, rec.description)?;
    }

    if !dashboard.recent_jobs.is_empty() {
        writeln!(out, "\nRecent jobs")?;
        for job in &dashboard.recent_jobs {
            writeln!(
                out,
                "- {} at {}: overall {}% | ATS {}% | skills {}% | experience {}%",
                job.job_title,
                job.company,
                job.overall_score,
                job.ats_score,
                job.skill_match_score,
                job.experience_score
            )?;
            if !job.missing_skills.is_empty() {
                let more = if job.additional_missing_skills > 0 {
                    format!(" (+{} more)", job.additional_missing_skills)
                } else {
                    String::new()
                };
                writeln!(out, "  missing: {}{}", job.missing_skills.join(", "), more)?;
            }
        }
    }

    Ok(())
}
