//! Template and output directories on disk

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::{Result, ToolError};

/// Name used when a custom template is saved without one
pub const DEFAULT_CUSTOM_NAME: &str = "custom_template";

const TEMPLATE_EXTENSION: &str = "txt";

const JOB_APPLICATION: &str = "\
Subject: Application for {position} Position

Dear {recipient_name},

I am writing to express my interest in the {position} position at {company_name}.
With {years_experience} years of experience in {field}, I believe I would be an
excellent fit for your team.

I am particularly excited about {company_name} because {reason}.

My skills include:
- {skill_1}
- {skill_2}
- {skill_3}

I would welcome the opportunity to discuss how my experience aligns with your needs.
Thank you for your consideration.

Best regards,
{sender_name}
{email}
{phone}
";

const MEETING_INVITATION: &str = "\
Subject: Meeting Invitation - {meeting_topic}

Dear {recipient_name},

I hope this email finds you well. I would like to schedule a meeting to discuss {meeting_topic}.

Meeting Details:
- Date: {date}
- Time: {time}
- Duration: {duration}
- Location: {location}
- Agenda: {agenda}

Please confirm your availability at your earliest convenience.

Looking forward to our discussion.

Best regards,
{sender_name}
{email}
";

const FOLLOWUP_EMAIL: &str = "\
Subject: Following Up - {subject}

Hi {recipient_name},

I wanted to follow up on {subject} that we discussed on {previous_date}.

{main_message}

Next Steps:
1. {step_1}
2. {step_2}
3. {step_3}

Please let me know if you have any questions or need additional information.

Best regards,
{sender_name}
";

const THANKYOU_EMAIL: &str = "\
Subject: Thank You - {occasion}

Dear {recipient_name},

Thank you so much for {reason}. Your {quality} truly made a difference.

{personal_message}

I look forward to {future_action}.

Warm regards,
{sender_name}
";

/// Built-in templates as `(file name, content)`
pub const SAMPLE_TEMPLATES: [(&str, &str); 4] = [
    ("job_application.txt", JOB_APPLICATION),
    ("meeting_invitation.txt", MEETING_INVITATION),
    ("followup_email.txt", FOLLOWUP_EMAIL),
    ("thankyou_email.txt", THANKYOU_EMAIL),
];

/// Reduce user text to something safe inside a file name
pub fn sanitize_file_component(text: &str, fallback: &str) -> String {
    let cleaned: String = text
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_matches('_');
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned.to_string()
    }
}

fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// First path `stem.txt`, `stem_2.txt`, ... that does not exist yet
fn unused_path(dir: &Path, stem: &str) -> PathBuf {
    let first = dir.join(format!("{}.{}", stem, TEMPLATE_EXTENSION));
    if !first.exists() {
        return first;
    }
    (2..)
        .map(|n| dir.join(format!("{}_{}.{}", stem, n, TEMPLATE_EXTENSION)))
        .find(|path| !path.exists())
        .unwrap_or(first)
}

/// Where templates are read from and filled emails are written to
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates_dir: PathBuf,
    output_dir: PathBuf,
}

impl TemplateLibrary {
    pub fn new(templates_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        TemplateLibrary {
            templates_dir: templates_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn has_templates_dir(&self) -> bool {
        self.templates_dir.is_dir()
    }

    /// Write the sample templates that are not already present.
    ///
    /// Returns the paths that were created; existing files are never touched.
    pub fn create_samples(&self) -> Result<Vec<PathBuf>> {
        if ensure_dir(&self.templates_dir)? {
            tracing::info!(dir = %self.templates_dir.display(), "created templates directory");
        }

        let mut created = Vec::new();
        for (name, content) in SAMPLE_TEMPLATES {
            let path = self.templates_dir.join(name);
            if path.exists() {
                continue;
            }
            fs::write(&path, content)?;
            created.push(path);
        }

        tracing::info!(created = created.len(), "sample templates written");
        Ok(created)
    }

    /// File names of every `.txt` template, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.has_templates_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.templates_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(name)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.template_path(name);
        fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ToolError::TemplateNotFound(path),
            _ => ToolError::Io(err),
        })
    }

    /// Save a user-written template; a blank name becomes `custom_template`.
    ///
    /// An existing template of the same name is replaced.
    pub fn save_custom(&self, name: &str, content: &str) -> Result<PathBuf> {
        let name = name.trim();
        let name = name
            .strip_suffix(&format!(".{}", TEMPLATE_EXTENSION))
            .unwrap_or(name);
        let stem = sanitize_file_component(name, DEFAULT_CUSTOM_NAME);

        ensure_dir(&self.templates_dir)?;
        let path = self
            .templates_dir
            .join(format!("{}.{}", stem, TEMPLATE_EXTENSION));
        fs::write(&path, content)?;

        tracing::info!(path = %path.display(), "saved custom template");
        Ok(path)
    }

    /// Save a filled email as `email_<recipient>_<timestamp>.txt`
    pub fn save_email(&self, recipient: &str, content: &str) -> Result<PathBuf> {
        self.save_email_at(recipient, content, Local::now())
    }

    /// Same as [`save_email`](Self::save_email) with an explicit clock reading
    pub fn save_email_at(
        &self,
        recipient: &str,
        content: &str,
        when: DateTime<Local>,
    ) -> Result<PathBuf> {
        ensure_dir(&self.output_dir)?;

        let stem = format!(
            "email_{}_{}",
            sanitize_file_component(recipient, "recipient"),
            when.format("%Y%m%d_%H%M%S")
        );
        // Batch runs can save several emails for one recipient within a second
        let path = unused_path(&self.output_dir, &stem);
        fs::write(&path, content)?;

        tracing::info!(path = %path.display(), "saved email");
        Ok(path)
    }
}
