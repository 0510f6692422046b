//! Email template filler
//!
//! Templates are plain `.txt` files with `{placeholder}` tokens. The menu
//! fills them one at a time or in batches and writes the results to the
//! output directory.

pub mod library;
pub mod template;

pub use library::{TemplateLibrary, DEFAULT_CUSTOM_NAME, SAMPLE_TEMPLATES};
pub use template::{default_value, fill_template, find_placeholders, readable_name};

use std::collections::BTreeMap;
use std::fs;

use crate::console::{confirm, parse_number, pause, Console, Screen};
use crate::errors::{Result, ToolError};

const MENU: [&str; 6] = [
    "Fill Single Email Template",
    "Batch Fill Multiple Emails",
    "Create Custom Template",
    "View Available Templates",
    "Create Sample Templates",
    "Exit",
];

/// Line that ends custom template entry
const END_OF_TEMPLATE: &str = "DONE";

/// The value typed for `recipient_name`, unless it was left blank
fn recipient_of(values: &BTreeMap<String, String>) -> Option<&str> {
    values
        .get("recipient_name")
        .map(String::as_str)
        .filter(|v| *v != default_value("recipient_name"))
}

/// Email session over one template library
pub struct EmailApp {
    library: TemplateLibrary,
}

impl EmailApp {
    pub fn new(library: TemplateLibrary) -> Self {
        EmailApp { library }
    }

    fn report(&self, console: &mut dyn Console, context: &str, err: &ToolError) {
        tracing::error!(%err, "{}", context);
        match err {
            ToolError::TemplateNotFound(_) => console.error(&format!("Error: {}!", err)),
            _ => console.error(&format!("{}: {}", context, err)),
        }
    }

    /// List templates and read a choice; `None` when nothing usable was picked
    fn select_template(&self, console: &mut dyn Console) -> Result<Option<String>> {
        console.banner("AVAILABLE TEMPLATES:");

        if !self.library.has_templates_dir() {
            console.error("No templates folder found!");
            return Ok(None);
        }

        let templates = match self.library.list() {
            Ok(templates) => templates,
            Err(err) => {
                self.report(console, "Error reading templates", &err);
                return Ok(None);
            }
        };
        if templates.is_empty() {
            console.error("No templates found!");
            return Ok(None);
        }

        for (i, name) in templates.iter().enumerate() {
            console.numbered(i + 1, name);
        }

        let answer = console.read_line("\nSelect template number: ")?;
        match parse_number::<usize>(&answer) {
            Ok(n) if (1..=templates.len()).contains(&n) => Ok(Some(templates[n - 1].clone())),
            Ok(_) => {
                console.error("Invalid choice!");
                Ok(None)
            }
            Err(_) => {
                console.error("Please enter a number!");
                Ok(None)
            }
        }
    }

    /// Pick a template and load it, reporting any problem
    fn load_selected(&self, console: &mut dyn Console) -> Result<Option<String>> {
        let Some(name) = self.select_template(console)? else {
            return Ok(None);
        };
        match self.library.read(&name) {
            Ok(content) => {
                tracing::debug!(template = %name, "template loaded");
                Ok(Some(content))
            }
            Err(err) => {
                self.report(console, "Error reading file", &err);
                Ok(None)
            }
        }
    }

    fn display_placeholders(&self, console: &mut dyn Console, placeholders: &[String]) {
        console.banner("REQUIRED INFORMATION:");
        for (i, placeholder) in placeholders.iter().enumerate() {
            console.numbered(i + 1, &readable_name(placeholder));
        }
        console.rule();
    }

    /// Ask for every placeholder in order; blank answers become `[name]`
    fn ask_values(
        &self,
        console: &mut dyn Console,
        placeholders: &[String],
    ) -> Result<BTreeMap<String, String>> {
        console.say("\nPlease provide the following information:");
        console.say("(Press Enter to skip optional fields)");
        console.thin_rule();

        let mut values = BTreeMap::new();
        for placeholder in placeholders {
            let answer = console.read_line(&format!("{}: ", readable_name(placeholder)))?;
            let answer = answer.trim();
            let value = if answer.is_empty() {
                default_value(placeholder)
            } else {
                answer.to_string()
            };
            values.insert(placeholder.clone(), value);
        }
        Ok(values)
    }

    fn fill_single(&self, console: &mut dyn Console) -> Result<()> {
        let Some(template) = self.load_selected(console)? else {
            return Ok(());
        };

        let placeholders = find_placeholders(&template);
        self.display_placeholders(console, &placeholders);
        let values = self.ask_values(console, &placeholders)?;
        let filled = fill_template(&template, &values);

        console.banner("EMAIL PREVIEW:");
        console.say(&filled);
        console.rule();

        if !confirm(console, "\nSave this email? (yes/no): ")? {
            return Ok(());
        }

        let recipient = recipient_of(&values).unwrap_or("recipient");
        let path = match self.library.save_email(recipient, &filled) {
            Ok(path) => path,
            Err(err) => {
                self.report(console, "Error saving file", &err);
                return Ok(());
            }
        };
        console.success(&format!("Email saved to: {}", path.display()));
        console.success("Email saved successfully!");

        if confirm(console, "Open the file? (yes/no): ")? {
            console.say(&format!("\n📄 Opening {}...\n", path.display()));
            console.rule();
            match fs::read_to_string(&path) {
                Ok(content) => console.say(&content),
                Err(err) => self.report(console, "Error reading file", &ToolError::from(err)),
            }
            console.rule();
        }
        Ok(())
    }

    fn batch_fill(&self, console: &mut dyn Console) -> Result<()> {
        console.banner("BATCH EMAIL GENERATION");

        let Some(template) = self.load_selected(console)? else {
            return Ok(());
        };
        let placeholders = find_placeholders(&template);

        let answer = console.read_line("\nHow many emails do you want to generate? ")?;
        let count = match parse_number::<i64>(&answer) {
            Ok(n) if n >= 1 => n as usize,
            Ok(_) => {
                console.error("Please enter at least 1!");
                return Ok(());
            }
            Err(_) => {
                console.error("Invalid number!");
                return Ok(());
            }
        };

        console.say(&format!("\n📧 Generating {} emails...", count));

        let mut saved = 0;
        for i in 1..=count {
            console.say(&format!("\n--- Email #{}/{} ---", i, count));
            let values = self.ask_values(console, &placeholders)?;
            let filled = fill_template(&template, &values);

            let fallback = format!("recipient_{}", i);
            let recipient = recipient_of(&values).unwrap_or(&fallback);
            match self.library.save_email(recipient, &filled) {
                Ok(path) => {
                    saved += 1;
                    console.success(&format!("Email saved to: {}", path.display()));
                }
                Err(err) => self.report(console, "Error saving file", &err),
            }
        }

        tracing::info!(requested = count, saved, "batch generation finished");
        if saved == count {
            console.success(&format!("Successfully generated {} emails!", count));
        } else {
            console.warning(&format!("Generated {} of {} emails.", saved, count));
        }
        Ok(())
    }

    fn create_custom(&self, console: &mut dyn Console) -> Result<()> {
        console.banner("CREATE CUSTOM TEMPLATE");
        console.say("\nTips:");
        console.say("- Use {placeholder_name} for values to fill later");
        console.say("- Example: Dear {name}, Welcome to {company}!");
        console.say(&format!("- Type '{}' on a new line when finished", END_OF_TEMPLATE));
        console.thin_rule();
        console.say("\nEnter your template (line by line):");

        let mut lines = Vec::new();
        loop {
            let line = console.read_line("")?;
            if line.trim().eq_ignore_ascii_case(END_OF_TEMPLATE) {
                break;
            }
            lines.push(line);
        }

        let name = console.read_line("\nEnter template name (without .txt): ")?;
        match self.library.save_custom(&name, &lines.join("\n")) {
            Ok(path) => console.success(&format!("Template saved to: {}", path.display())),
            Err(err) => self.report(console, "Error saving template", &err),
        }
        Ok(())
    }

    fn view_templates(&self, console: &mut dyn Console) {
        console.banner("TEMPLATE LIBRARY:");

        if !self.library.has_templates_dir() {
            console.error("No templates folder found!");
            return;
        }

        let templates = match self.library.list() {
            Ok(templates) => templates,
            Err(err) => {
                self.report(console, "Error reading templates", &err);
                return;
            }
        };
        if templates.is_empty() {
            console.error("No templates found!");
            return;
        }

        for name in templates {
            console.say(&format!("\n📄 {}", name));
            console.thin_rule();
            match self.library.read(&name) {
                Ok(content) => console.say(&format!(
                    "Placeholders: {}",
                    find_placeholders(&content).join(", ")
                )),
                Err(err) => self.report(console, "Error reading file", &err),
            }
        }
    }

    fn create_samples(&self, console: &mut dyn Console) {
        match self.library.create_samples() {
            Ok(created) if created.is_empty() => {
                console.info("All sample templates already exist.")
            }
            Ok(created) => {
                for path in created {
                    console.success(&format!("Created template: {}", path.display()));
                }
            }
            Err(err) => self.report(console, "Error creating templates", &err),
        }
    }

    /// Menu loop; a closed input stream leaves quietly
    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        match self.menu_loop(console) {
            Err(ToolError::EndOfInput) => Ok(()),
            other => other,
        }
    }

    fn menu_loop(&self, console: &mut dyn Console) -> Result<()> {
        loop {
            console.menu("     📧 EMAIL TEMPLATE FILLER 📧", &MENU);
            let choice = console.read_line("\nEnter your choice (1-6): ")?;

            match choice.trim() {
                "1" => self.fill_single(console)?,
                "2" => self.batch_fill(console)?,
                "3" => self.create_custom(console)?,
                "4" => self.view_templates(console),
                "5" => self.create_samples(console),
                "6" => {
                    console.success("Thank you for using Email Template Filler!");
                    console.say("📧 Happy emailing!\n");
                    return Ok(());
                }
                _ => console.error("Invalid choice! Please enter 1-6."),
            }

            pause(console, "\nPress Enter to continue...")?;
        }
    }
}

/// Run the email menu against `library`
pub fn run(console: &mut dyn Console, library: TemplateLibrary) -> Result<()> {
    console.say(&format!("\n{}", "📧".repeat(25)));
    console.say("   WELCOME TO EMAIL TEMPLATE FILLER!");
    console.say(&"📧".repeat(25));
    console.say("\nAutomate your email writing with templates!");

    EmailApp::new(library).run(console)
}
