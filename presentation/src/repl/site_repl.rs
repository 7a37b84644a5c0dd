//! Interactive session: edit the forms, submit them, watch the banner

use crate::output::banner::StatusBanner;
use crate::output::page::PageRenderer;
use crate::repl::command::ReplCommand;
use colored::Colorize;
use hvac_application::{LeadApi, SiteSession, SubmitFormError, SubmitHandle};
use hvac_domain::{LeadKind, SiteContent};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// Interactive site REPL
pub struct SiteRepl<A: LeadApi + 'static> {
    session: SiteSession<A>,
    content: &'static SiteContent,
    pending: Vec<(LeadKind, SubmitHandle)>,
}

impl<A: LeadApi + 'static> SiteRepl<A> {
    /// Create a new SiteRepl
    pub fn new(api: Arc<A>) -> Self {
        Self {
            session: SiteSession::new(api),
            content: SiteContent::continental(),
            pending: Vec::new(),
        }
    }

    pub fn session(&self) -> &SiteSession<A> {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("hvac-site").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("hvac".to_string()),
            DefaultPromptSegment::Empty,
        );

        // Page load
        let _ = self.session.load();
        self.print_welcome();

        loop {
            let signal = line_editor.read_line(&prompt)?;

            if let Some(report) = self.collect_finished().await {
                println!("{}", report);
            }

            match signal {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match ReplCommand::parse(line) {
                        Ok(ReplCommand::Quit) => {
                            self.finish_pending().await;
                            println!("Bye!");
                            break;
                        }
                        Ok(command) => {
                            let output = self.execute(command).await;
                            if !output.is_empty() {
                                println!("{}", output);
                            }
                        }
                        Err(e) => println!("{}", e.to_string().red()),
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    self.finish_pending().await;
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        {:<37}│", format!("{} - Online", self.content.business_name));
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", Self::help_text());
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  quote <field> <value>    Set a quote field (name, email, phone, message, service_type)",
            "  contact <field> <value>  Set a contact field (name, email, phone, message)",
            "  show [quote|contact]     Show form values",
            "  submit quote|contact     Submit a form",
            "  reset quote|contact      Clear a form",
            "  status                   Show the status banner",
            "  testimonials             Show testimonials",
            "  refresh                  Fetch testimonials again",
            "  page                     Render the whole page",
            "  help                     Show this help",
            "  quit                     Exit",
        ]
        .join("\n")
    }

    /// Run one parsed command and return what to print
    pub async fn execute(&mut self, command: ReplCommand) -> String {
        match command {
            ReplCommand::Set { kind, field, value } => {
                match self.session.edit(kind, &field, &value) {
                    Ok(()) => String::new(),
                    Err(e) => e.to_string().red().to_string(),
                }
            }
            ReplCommand::Show(kind) => self.show(kind),
            ReplCommand::Submit(kind) => self.submit(kind),
            ReplCommand::Reset(kind) => {
                self.session.reset(kind);
                format!("{} form cleared", kind)
            }
            ReplCommand::Status => StatusBanner::render(&self.session.status())
                .unwrap_or_else(|| "No status".dimmed().to_string()),
            ReplCommand::Testimonials => {
                let testimonials = self.session.testimonials();
                if testimonials.is_empty() {
                    "No testimonials yet".dimmed().to_string()
                } else {
                    PageRenderer::render_testimonials(&testimonials)
                }
            }
            ReplCommand::Refresh => {
                // Waits so the list shown next reflects the fetch
                let _ = self.session.load().await;
                format!("{} testimonials", self.session.testimonials().len())
            }
            ReplCommand::Page => PageRenderer::render(
                self.content,
                &self.session.testimonials(),
                &self.session.status(),
            ),
            ReplCommand::Help => Self::help_text(),
            ReplCommand::Quit => String::new(),
        }
    }

    fn show(&self, kind: Option<LeadKind>) -> String {
        let quote = PageRenderer::render_quote_form(&self.session.quote_form().get());
        let contact = PageRenderer::render_contact_form(&self.session.contact_form().get());
        match kind {
            Some(LeadKind::Quote) => quote,
            Some(LeadKind::Contact) => contact,
            None => format!("{}\n{}", quote, contact),
        }
    }

    /// Start a submission in the background. Input keeps working while the
    /// request is out; the banner is printed once it resolves.
    fn submit(&mut self, kind: LeadKind) -> String {
        if self.session.is_submitting(kind) {
            return SubmitFormError::AlreadySubmitting(kind)
                .to_string()
                .yellow()
                .to_string();
        }

        let missing = self.session.missing_fields(kind);
        if !missing.is_empty() {
            return format!("Please fill in: {}", missing.join(", "))
                .yellow()
                .to_string();
        }

        self.pending.push((kind, self.session.spawn_submit(kind)));
        format!("Submitting {}...", kind).dimmed().to_string()
    }

    /// Report submissions that resolved since the last prompt
    pub async fn collect_finished(&mut self) -> Option<String> {
        let (finished, still_pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|(_, handle)| handle.is_finished());
        self.pending = still_pending;

        if finished.is_empty() {
            return None;
        }

        for (kind, handle) in finished {
            if let Err(e) = handle.await {
                warn!("{} submission task failed: {}", kind, e);
            }
        }
        StatusBanner::render(&self.session.status())
    }

    /// Let in-flight submissions complete before leaving
    async fn finish_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        println!("{}", "Waiting for pending submissions...".dimmed());
        for (kind, handle) in self.pending.drain(..) {
            if let Err(e) = handle.await {
                warn!("{} submission task failed: {}", kind, e);
            }
        }
        if let Some(banner) = StatusBanner::render(&self.session.status()) {
            println!("{}", banner);
        }
    }
}
